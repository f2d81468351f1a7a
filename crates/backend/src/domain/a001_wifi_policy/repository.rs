//! In-memory snapshot of the engine, site catalogs and site overrides.
//!
//! Built once at startup and read-only afterwards, so handlers share it
//! without locking.

use contracts::domain::a001_wifi_policy::{Policy, SitePolicyCatalog};
use contracts::enums::Segment;
use contracts::shared::policy_engine::{PolicyEngine, SiteOverrides};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

use super::catalog_import::CatalogKey;

static POLICY_STORE: OnceCell<PolicyStore> = OnceCell::new();

#[derive(Debug, Default)]
pub struct PolicyStore {
    engine: PolicyEngine,
    catalogs: HashMap<CatalogKey, SitePolicyCatalog>,
    sites: HashMap<String, SiteOverrides>,
}

impl PolicyStore {
    pub fn new(
        engine: PolicyEngine,
        catalogs: HashMap<CatalogKey, SitePolicyCatalog>,
        sites: HashMap<String, SiteOverrides>,
    ) -> Self {
        Self {
            engine,
            catalogs,
            sites,
        }
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    pub fn catalog(&self, site_id: &str, segment: Segment) -> Option<&SitePolicyCatalog> {
        self.catalogs.get(&(site_id.to_string(), segment))
    }

    /// Policies of a site/segment; empty when the site has no catalog
    pub fn policies(&self, site_id: &str, segment: Segment) -> &[Policy] {
        self.catalog(site_id, segment)
            .map(|c| c.policies())
            .unwrap_or(&[])
    }

    pub fn site_overrides(&self, site_id: &str) -> SiteOverrides {
        self.sites.get(site_id).cloned().unwrap_or_default()
    }

    pub fn catalog_count(&self) -> usize {
        self.catalogs.len()
    }
}

pub fn initialize(store: PolicyStore) -> anyhow::Result<()> {
    POLICY_STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("Policy store is already initialized"))
}

pub fn get_store() -> Option<&'static PolicyStore> {
    POLICY_STORE.get()
}
