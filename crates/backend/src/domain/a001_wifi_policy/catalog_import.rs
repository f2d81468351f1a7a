//! Site policy catalogs from a CSV provisioning file
//!
//! Header: `site_id,segment,speed,data_volume,device_count,cycle_type,policy_id`.
//! An empty `policy_id` is filled from the generator; a filled one must match
//! it exactly.

use anyhow::Result;
use contracts::domain::a001_wifi_policy::{
    DeviceCount, Policy, PolicyAttribute, PolicyError, PolicyIdGenerator, SitePolicyCatalog,
};
use contracts::enums::{CycleType, DataVolume, Segment, SpeedTier};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub type CatalogKey = (String, Segment);

#[derive(Debug, Deserialize)]
struct CatalogRow {
    site_id: String,
    segment: String,
    speed: String,
    data_volume: String,
    device_count: i64,
    cycle_type: String,
    #[serde(default)]
    policy_id: String,
}

#[derive(Debug, Error)]
enum RowError {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Policy(#[from] PolicyError),

    #[error("site_id is empty")]
    MissingSite,
}

#[derive(Debug, Default)]
pub struct ImportResult {
    pub catalogs: HashMap<CatalogKey, SitePolicyCatalog>,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

/// Read the provisioning file. A missing file is not an error: every site
/// then runs on baseline options only.
pub fn load_catalogs(path: &Path, generator: &PolicyIdGenerator) -> Result<ImportResult> {
    if !path.exists() {
        tracing::warn!(
            "Policy catalog not found at {}, all sites will use baseline options",
            path.display()
        );
        return Ok(ImportResult::default());
    }

    tracing::info!("Loading policy catalog from: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    import_catalogs(&text, generator)
}

pub fn import_catalogs(csv_text: &str, generator: &PolicyIdGenerator) -> Result<ImportResult> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            anyhow::bail!("Failed to read CSV headers: {}", e);
        }
    };
    tracing::debug!(
        "Policy catalog CSV headers: {:?}",
        headers.iter().collect::<Vec<_>>()
    );

    let mut result = ImportResult::default();

    for (index, record) in reader.deserialize::<CatalogRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        let outcome = record
            .map_err(RowError::from)
            .and_then(|row| to_policy(row, generator))
            .and_then(|(site_id, policy)| {
                let segment = policy.segment;
                result
                    .catalogs
                    .entry((site_id.clone(), segment))
                    .or_insert_with(|| SitePolicyCatalog::new(site_id, segment))
                    .insert(policy, generator)
                    .map_err(RowError::from)
            });

        match outcome {
            Ok(()) => result.imported += 1,
            Err(e) => {
                tracing::warn!("Policy catalog line {} skipped: {}", line, e);
                result.skipped += 1;
                result.errors.push(format!("line {}: {}", line, e));
            }
        }
    }

    tracing::info!(
        "Policy catalog imported: {} policies in {} catalogs, {} rows skipped",
        result.imported,
        result.catalogs.len(),
        result.skipped
    );

    Ok(result)
}

fn to_policy(row: CatalogRow, generator: &PolicyIdGenerator) -> Result<(String, Policy), RowError> {
    if row.site_id.is_empty() {
        return Err(RowError::MissingSite);
    }

    let segment = Segment::from_key(&row.segment)
        .ok_or_else(|| PolicyError::invalid(PolicyAttribute::Segment, &row.segment))?;
    let speed = SpeedTier::from_label(&row.speed)
        .ok_or_else(|| PolicyError::invalid(PolicyAttribute::Speed, &row.speed))?;
    let data_volume = DataVolume::from_label(&row.data_volume)
        .ok_or_else(|| PolicyError::invalid(PolicyAttribute::DataVolume, &row.data_volume))?;
    let device_count = DeviceCount::from_raw(row.device_count)?;
    let cycle_type = CycleType::from_label(&row.cycle_type)
        .ok_or_else(|| PolicyError::invalid(PolicyAttribute::CycleType, &row.cycle_type))?;

    let mut policy = Policy::new(
        generator,
        segment,
        speed,
        data_volume,
        device_count,
        cycle_type,
    );
    // a provided ID is checked by the catalog on insert
    if !row.policy_id.is_empty() {
        policy.policy_id = row.policy_id;
    }

    Ok((row.site_id, policy))
}
