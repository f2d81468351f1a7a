//! Option narrowing over the catalog relation.
//!
//! One filter is built from the pinned attributes and the cycle type, and
//! every open dimension is projected from that same row set. Results depend
//! only on what is pinned right now, never on the order it was pinned in.

use serde::{Deserialize, Serialize};

use super::baseline::BaselineOptionSets;
use crate::domain::a001_wifi_policy::{DeviceCount, Policy};
use crate::enums::{CycleType, DataVolume, SpeedTier};

/// Attributes the user has already picked. `None` means the dimension is
/// open and should be offered as options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<SpeedTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_volume: Option<DataVolume>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_count: Option<DeviceCount>,
}

impl FixedAttributes {
    pub fn with_speed(mut self, speed: SpeedTier) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_data_volume(mut self, data_volume: DataVolume) -> Self {
        self.data_volume = Some(data_volume);
        self
    }

    pub fn with_device_count(mut self, device_count: DeviceCount) -> Self {
        self.device_count = Some(device_count);
        self
    }

    /// Exact match on every pinned attribute
    pub fn matches(&self, policy: &Policy) -> bool {
        self.speed.map_or(true, |s| policy.speed == s)
            && self.data_volume.map_or(true, |d| policy.data_volume == d)
            && self.device_count.map_or(true, |n| policy.device_count == n)
    }
}

/// Where a dimension's values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionSource {
    Catalog,
    /// No catalog row satisfied the pinned attributes for this cycle
    BaselineFallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionOptions<T> {
    pub values: Vec<T>,
    pub source: OptionSource,
}

impl<T> DimensionOptions<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == OptionSource::BaselineFallback
    }
}

/// Options for every open dimension; pinned dimensions are `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidCombinations {
    pub speeds: Option<DimensionOptions<SpeedTier>>,
    pub data_volumes: Option<DimensionOptions<DataVolume>>,
    pub device_counts: Option<DimensionOptions<DeviceCount>>,
}

impl ValidCombinations {
    pub fn used_fallback(&self) -> bool {
        self.speeds.as_ref().is_some_and(|d| d.is_fallback())
            || self.data_volumes.as_ref().is_some_and(|d| d.is_fallback())
            || self.device_counts.as_ref().is_some_and(|d| d.is_fallback())
    }
}

pub fn valid_combinations(
    policies: &[Policy],
    fixed: &FixedAttributes,
    cycle_type: CycleType,
    baseline: &BaselineOptionSets,
) -> ValidCombinations {
    // Open dimensions are `None` in `fixed`, so this filter never constrains
    // the dimension being projected.
    let rows: Vec<&Policy> = policies
        .iter()
        .filter(|p| p.cycle_type == cycle_type && fixed.matches(p))
        .collect();

    ValidCombinations {
        speeds: fixed.speed.is_none().then(|| {
            project(&rows, |p| p.speed, baseline.speed_options_for(cycle_type))
        }),
        data_volumes: fixed.data_volume.is_none().then(|| {
            project(&rows, |p| p.data_volume, baseline.data_options_for(cycle_type))
        }),
        device_counts: fixed.device_count.is_none().then(|| {
            project(&rows, |p| p.device_count, baseline.device_options())
        }),
    }
}

/// Distinct values in catalog order, or the baseline when nothing matched
fn project<T, F>(rows: &[&Policy], attribute: F, fallback: &[T]) -> DimensionOptions<T>
where
    T: Copy + PartialEq,
    F: Fn(&Policy) -> T,
{
    let mut values: Vec<T> = Vec::new();
    for row in rows {
        let value = attribute(row);
        if !values.contains(&value) {
            values.push(value);
        }
    }

    if values.is_empty() {
        DimensionOptions {
            values: fallback.to_vec(),
            source: OptionSource::BaselineFallback,
        }
    } else {
        DimensionOptions {
            values,
            source: OptionSource::Catalog,
        }
    }
}
