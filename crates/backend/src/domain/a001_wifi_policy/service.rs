use contracts::domain::a001_wifi_policy::dto::{
    CycleRulesQuery, OptionsRequest, PolicyIdRequest, PolicyIdResponse,
};
use contracts::domain::a001_wifi_policy::{Policy, PolicyError};
use contracts::shared::policy_engine::{CycleRule, ValidCombinations};

use super::repository::PolicyStore;

/// Правила выбора цикла для сегмента на сайте
pub fn cycle_rules(
    store: &PolicyStore,
    site_id: &str,
    query: &CycleRulesQuery,
) -> Result<CycleRule, PolicyError> {
    let site = store.site_overrides(site_id);
    let rule = store
        .engine()
        .resolve_cycle_types_for_key(&query.segment, query.mode, &site)?;

    if store.engine().segment_for_key(&query.segment)?.is_none() {
        tracing::warn!(
            "Unknown segment '{}' for site {}, using generic cycle rule",
            query.segment,
            site_id
        );
    }

    Ok(rule)
}

/// Каталог политик сайта для сегмента
pub fn catalog(
    store: &PolicyStore,
    site_id: &str,
    segment_key: &str,
) -> Result<Vec<Policy>, PolicyError> {
    let policies = match store.engine().segment_for_key(segment_key)? {
        Some(segment) => store.policies(site_id, segment).to_vec(),
        None => Vec::new(),
    };
    Ok(policies)
}

/// Допустимые значения для открытых полей формы
pub fn options(
    store: &PolicyStore,
    site_id: &str,
    request: &OptionsRequest,
) -> Result<ValidCombinations, PolicyError> {
    let policies: &[Policy] = match store.engine().segment_for_key(&request.segment)? {
        Some(segment) => store.policies(site_id, segment),
        None => &[],
    };

    let result = store
        .engine()
        .valid_combinations(policies, &request.fixed, request.cycle_type);

    if result.used_fallback() {
        tracing::debug!(
            "Baseline fallback for site {} segment '{}' ({} cycle, fixed {:?})",
            site_id,
            request.segment,
            request.cycle_type,
            request.fixed
        );
    }

    Ok(result)
}

/// Генерация Policy ID из сырых значений формы
pub fn policy_id(
    store: &PolicyStore,
    request: &PolicyIdRequest,
) -> Result<PolicyIdResponse, PolicyError> {
    let policy_id = store.engine().generate_policy_id_raw(
        &request.segment,
        &request.speed,
        &request.data_volume,
        request.device_count,
        &request.cycle_type,
    )?;
    Ok(PolicyIdResponse { policy_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_wifi_policy::catalog_import::import_catalogs;
    use contracts::domain::a001_wifi_policy::PolicyIdGenerator;
    use contracts::enums::{CycleType, SpeedTier};
    use contracts::shared::policy_engine::{
        FixedAttributes, FormMode, OptionSource, PolicyEngine, PolicyEngineConfig,
        SiteOverrides, UnknownSegmentPolicy,
    };
    use std::collections::HashMap;

    const CSV: &str = "site_id,segment,speed,data_volume,device_count,cycle_type,policy_id\n\
        site-1,enterprise,50Mbps,Unlimited,3,Monthly,\n\
        site-1,enterprise,20Mbps,50GB,2,Monthly,\n\
        site-1,miscellaneous,10Mbps,10GB,1,Daily,\n";

    fn store_with(engine: PolicyEngine) -> PolicyStore {
        let imported = import_catalogs(CSV, &PolicyIdGenerator::default()).unwrap();
        let mut sites = HashMap::new();
        sites.insert(
            "site-1".to_string(),
            SiteOverrides {
                miscellaneous_cycle: Some(CycleType::Daily),
            },
        );
        PolicyStore::new(engine, imported.catalogs, sites)
    }

    fn strict_engine() -> PolicyEngine {
        PolicyEngine::new(PolicyEngineConfig {
            unknown_segment: UnknownSegmentPolicy::Strict,
            ..PolicyEngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_cycle_rules_use_site_overrides() {
        let store = store_with(PolicyEngine::default());
        let query = CycleRulesQuery {
            segment: "miscellaneous".into(),
            mode: FormMode::Create,
        };

        let rule = cycle_rules(&store, "site-1", &query).unwrap();
        assert_eq!(rule.allowed, vec![CycleType::Daily]);

        let rule = cycle_rules(&store, "site-unknown", &query).unwrap();
        assert_eq!(rule.allowed, vec![CycleType::Monthly]);
    }

    #[test]
    fn test_unknown_segment_permissive_vs_strict() {
        let query = CycleRulesQuery {
            segment: "airport".into(),
            mode: FormMode::Edit,
        };

        let rule = cycle_rules(&store_with(PolicyEngine::default()), "site-1", &query).unwrap();
        assert!(rule.editable);

        let err = cycle_rules(&store_with(strict_engine()), "site-1", &query).unwrap_err();
        assert_eq!(err, PolicyError::UnknownSegment("airport".into()));
    }

    #[test]
    fn test_options_narrow_by_catalog() {
        let store = store_with(PolicyEngine::default());
        let request = OptionsRequest {
            segment: "enterprise".into(),
            cycle_type: CycleType::Monthly,
            fixed: FixedAttributes::default().with_speed(SpeedTier::Mbps20),
        };

        let result = options(&store, "site-1", &request).unwrap();
        assert!(result.speeds.is_none());
        let volumes = result.data_volumes.unwrap();
        assert_eq!(volumes.source, OptionSource::Catalog);
        assert_eq!(volumes.values.len(), 1);
    }

    #[test]
    fn test_options_for_site_without_catalog() {
        let store = store_with(PolicyEngine::default());
        let request = OptionsRequest {
            segment: "hotel".into(),
            cycle_type: CycleType::Daily,
            fixed: FixedAttributes::default(),
        };
        let result = options(&store, "site-1", &request).unwrap();
        assert!(result.used_fallback());
        assert_eq!(result.speeds.unwrap().values.len(), 5);
    }

    #[test]
    fn test_catalog_listing() {
        let store = store_with(PolicyEngine::default());
        let policies = catalog(&store, "site-1", "enterprise").unwrap();
        assert_eq!(policies.len(), 2);
        assert!(catalog(&store, "site-1", "pg").unwrap().is_empty());
        assert!(catalog(&store_with(strict_engine()), "site-1", "airport").is_err());
    }

    #[test]
    fn test_policy_id_from_raw_values() {
        let store = store_with(PolicyEngine::default());
        let request = PolicyIdRequest {
            segment: "enterprise".into(),
            speed: "50Mbps".into(),
            data_volume: "Unlimited".into(),
            device_count: 3,
            cycle_type: "Monthly".into(),
        };
        assert_eq!(
            policy_id(&store, &request).unwrap().policy_id,
            "ENT_WIFI_50Mbps_Unlimited_3Devices"
        );

        let request = PolicyIdRequest {
            device_count: 0,
            ..request
        };
        assert!(matches!(
            policy_id(&store, &request),
            Err(PolicyError::InvalidPolicyAttribute { .. })
        ));
    }
}
