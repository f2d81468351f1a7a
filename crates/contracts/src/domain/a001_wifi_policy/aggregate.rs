use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{PolicyAttribute, PolicyError};
use super::policy_id::PolicyIdGenerator;
use crate::enums::{ConnectionType, CycleType, DataVolume, Segment, SpeedTier};

// ============================================================================
// Device count
// ============================================================================

/// Максимальное число одновременно подключённых устройств (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DeviceCount(u8);

impl DeviceCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, PolicyError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PolicyError::invalid(PolicyAttribute::DeviceCount, value))
        }
    }

    /// Validate an untrusted integer (JSON body, CSV cell)
    pub fn from_raw(value: i64) -> Result<Self, PolicyError> {
        u8::try_from(value)
            .map_err(|_| PolicyError::invalid(PolicyAttribute::DeviceCount, value))
            .and_then(Self::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn all() -> Vec<DeviceCount> {
        (Self::MIN..=Self::MAX).map(DeviceCount).collect()
    }
}

impl TryFrom<u8> for DeviceCount {
    type Error = PolicyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceCount> for u8 {
    fn from(count: DeviceCount) -> Self {
        count.0
    }
}

impl fmt::Display for DeviceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Legal (speed, data volume, device count, cycle type) combination for a
/// segment, keyed by its policy ID.
///
/// The policy ID is internal and billing-facing; it is never rendered to end
/// users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub segment: Segment,
    #[serde(default)]
    pub connection_type: ConnectionType,
    pub speed: SpeedTier,
    pub data_volume: DataVolume,
    pub device_count: DeviceCount,
    pub cycle_type: CycleType,
    pub policy_id: String,
}

impl Policy {
    /// Build a policy whose ID is derived by the generator
    pub fn new(
        generator: &PolicyIdGenerator,
        segment: Segment,
        speed: SpeedTier,
        data_volume: DataVolume,
        device_count: DeviceCount,
        cycle_type: CycleType,
    ) -> Self {
        let policy_id = generator.generate(segment, speed, data_volume, device_count, cycle_type);
        Self {
            segment,
            connection_type: ConnectionType::Wifi,
            speed,
            data_volume,
            device_count,
            cycle_type,
            policy_id,
        }
    }

    /// Same (speed, data volume, device count, cycle type) tuple
    pub fn same_combination(&self, other: &Policy) -> bool {
        self.speed == other.speed
            && self.data_volume == other.data_volume
            && self.device_count == other.device_count
            && self.cycle_type == other.cycle_type
    }

    /// Check that the stored ID is the one the generator derives
    pub fn verify_id(&self, generator: &PolicyIdGenerator) -> Result<(), PolicyError> {
        let expected = generator.generate(
            self.segment,
            self.speed,
            self.data_volume,
            self.device_count,
            self.cycle_type,
        );
        if expected == self.policy_id {
            Ok(())
        } else {
            Err(PolicyError::PolicyIdMismatch {
                expected,
                found: self.policy_id.clone(),
            })
        }
    }
}
