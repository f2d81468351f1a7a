//! Segment-agnostic default option sets.
//!
//! Used whenever the catalog has nothing to offer for a dimension, so the
//! form never ends up with an empty dropdown.

use serde::{Deserialize, Serialize};

use crate::domain::a001_wifi_policy::{DeviceCount, PolicyError};
use crate::enums::{CycleType, DataVolume, SpeedTier};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleBaseline {
    pub speeds: Vec<SpeedTier>,
    pub data_volumes: Vec<DataVolume>,
}

impl Default for CycleBaseline {
    fn default() -> Self {
        Self {
            speeds: SpeedTier::all(),
            data_volumes: DataVolume::all(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineOptionSets {
    pub daily: CycleBaseline,
    pub monthly: CycleBaseline,
    /// Device limits do not depend on the cycle
    pub device_counts: Vec<DeviceCount>,
}

impl Default for BaselineOptionSets {
    fn default() -> Self {
        Self {
            daily: CycleBaseline::default(),
            monthly: CycleBaseline::default(),
            device_counts: DeviceCount::all(),
        }
    }
}

impl BaselineOptionSets {
    fn for_cycle(&self, cycle_type: CycleType) -> &CycleBaseline {
        match cycle_type {
            CycleType::Daily => &self.daily,
            CycleType::Monthly => &self.monthly,
        }
    }

    pub fn speed_options_for(&self, cycle_type: CycleType) -> &[SpeedTier] {
        &self.for_cycle(cycle_type).speeds
    }

    pub fn data_options_for(&self, cycle_type: CycleType) -> &[DataVolume] {
        &self.for_cycle(cycle_type).data_volumes
    }

    pub fn device_options(&self) -> &[DeviceCount] {
        &self.device_counts
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        for cycle_type in CycleType::all() {
            if self.speed_options_for(cycle_type).is_empty() {
                return Err(PolicyError::InvalidConfig(format!(
                    "baseline speeds for {} cycle are empty",
                    cycle_type
                )));
            }
            if self.data_options_for(cycle_type).is_empty() {
                return Err(PolicyError::InvalidConfig(format!(
                    "baseline data volumes for {} cycle are empty",
                    cycle_type
                )));
            }
        }
        if self.device_counts.is_empty() {
            return Err(PolicyError::InvalidConfig(
                "baseline device counts are empty".to_string(),
            ));
        }
        Ok(())
    }
}
