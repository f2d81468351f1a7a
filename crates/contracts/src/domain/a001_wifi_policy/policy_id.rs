//! Canonical policy ID: `{SEGMENT_CODE}_WIFI_{SPEED}_{DATA}_{DEVICES}Devices`
//!
//! The layout is shared with billing/provisioning and with CSV bulk import,
//! so it has to stay byte-exact.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::aggregate::DeviceCount;
use super::error::{PolicyAttribute, PolicyError};
use crate::enums::{ConnectionType, CycleType, DataVolume, Segment, SpeedTier};

const SEPARATOR: char = '_';
const DEVICES_SUFFIX: &str = "Devices";

// ============================================================================
// Segment codes
// ============================================================================

/// Segment abbreviation table. One field per segment, so a new segment
/// cannot be added without giving it a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentCodes {
    pub enterprise: String,
    pub office: String,
    pub co_living: String,
    pub co_working: String,
    pub hotel: String,
    pub pg: String,
    pub miscellaneous: String,
}

impl Default for SegmentCodes {
    fn default() -> Self {
        Self {
            enterprise: "ENT".into(),
            office: "OFC".into(),
            co_living: "COL".into(),
            co_working: "COW".into(),
            hotel: "HTL".into(),
            pg: "PG".into(),
            miscellaneous: "MISC".into(),
        }
    }
}

impl SegmentCodes {
    pub fn code_for(&self, segment: Segment) -> &str {
        match segment {
            Segment::Enterprise => &self.enterprise,
            Segment::Office => &self.office,
            Segment::CoLiving => &self.co_living,
            Segment::CoWorking => &self.co_working,
            Segment::Hotel => &self.hotel,
            Segment::Pg => &self.pg,
            Segment::Miscellaneous => &self.miscellaneous,
        }
    }

    pub fn segment_for(&self, code: &str) -> Option<Segment> {
        Segment::all()
            .into_iter()
            .find(|segment| self.code_for(*segment) == code)
    }

    /// Codes must be non-empty uppercase ASCII and pairwise distinct
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut seen = HashSet::new();
        for segment in Segment::all() {
            let code = self.code_for(segment);
            if code.is_empty() || !code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PolicyError::InvalidConfig(format!(
                    "segment code '{}' for {} must match [A-Z]+",
                    code, segment
                )));
            }
            if !seen.insert(code) {
                return Err(PolicyError::InvalidConfig(format!(
                    "segment code '{}' is used by more than one segment",
                    code
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Attributes recoverable from a policy ID. The cycle type is not part of
/// the token layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyIdParts {
    pub segment: Segment,
    pub speed: SpeedTier,
    pub data_volume: DataVolume,
    pub device_count: DeviceCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyIdGenerator {
    codes: SegmentCodes,
}

impl PolicyIdGenerator {
    pub fn new(codes: SegmentCodes) -> Result<Self, PolicyError> {
        codes.validate()?;
        Ok(Self { codes })
    }

    pub fn codes(&self) -> &SegmentCodes {
        &self.codes
    }

    /// Typed inputs are always inside their domains, so this cannot fail.
    /// The cycle type identifies the catalog row but is not encoded.
    pub fn generate(
        &self,
        segment: Segment,
        speed: SpeedTier,
        data_volume: DataVolume,
        device_count: DeviceCount,
        _cycle_type: CycleType,
    ) -> String {
        format!(
            "{code}{sep}{conn}{sep}{speed}{sep}{data}{sep}{devices}{suffix}",
            code = self.codes.code_for(segment),
            conn = ConnectionType::Wifi.code(),
            speed = speed.label(),
            data = data_volume.label(),
            devices = device_count.value(),
            suffix = DEVICES_SUFFIX,
            sep = SEPARATOR,
        )
    }

    /// Entry point for untyped callers (API bodies, import rows).
    ///
    /// Every value is checked against its domain first; the first offending
    /// attribute is reported as `InvalidPolicyAttribute`.
    pub fn generate_raw(
        &self,
        segment: &str,
        speed: &str,
        data_volume: &str,
        device_count: i64,
        cycle_type: &str,
    ) -> Result<String, PolicyError> {
        let segment = Segment::from_key(segment)
            .ok_or_else(|| PolicyError::invalid(PolicyAttribute::Segment, segment))?;
        let speed = SpeedTier::from_label(speed)
            .ok_or_else(|| PolicyError::invalid(PolicyAttribute::Speed, speed))?;
        let data_volume = DataVolume::from_label(data_volume)
            .ok_or_else(|| PolicyError::invalid(PolicyAttribute::DataVolume, data_volume))?;
        let device_count = DeviceCount::from_raw(device_count)?;
        let cycle_type = CycleType::from_label(cycle_type)
            .ok_or_else(|| PolicyError::invalid(PolicyAttribute::CycleType, cycle_type))?;

        Ok(self.generate(segment, speed, data_volume, device_count, cycle_type))
    }

    /// Inverse of [`generate`](Self::generate), used by import tooling that
    /// references policies by ID.
    pub fn parse(&self, policy_id: &str) -> Result<PolicyIdParts, PolicyError> {
        let malformed = || PolicyError::MalformedPolicyId(policy_id.to_string());

        let tokens: Vec<&str> = policy_id.split(SEPARATOR).collect();
        let [code, conn, speed, data, devices] = tokens.as_slice() else {
            return Err(malformed());
        };

        if *conn != ConnectionType::Wifi.code() {
            return Err(malformed());
        }

        let segment = self.codes.segment_for(code).ok_or_else(malformed)?;
        let speed = SpeedTier::from_label(speed).ok_or_else(malformed)?;
        let data_volume = DataVolume::from_label(data).ok_or_else(malformed)?;

        // Single digit only: "03Devices" would not regenerate to the same ID
        let count = devices.strip_suffix(DEVICES_SUFFIX).ok_or_else(malformed)?;
        if count.len() != 1 {
            return Err(malformed());
        }
        let device_count = count
            .parse::<u8>()
            .ok()
            .and_then(|n| DeviceCount::new(n).ok())
            .ok_or_else(malformed)?;

        Ok(PolicyIdParts {
            segment,
            speed,
            data_volume,
            device_count,
        })
    }
}

/// Generate a policy ID with the default segment code table
pub fn generate_policy_id(
    segment: &str,
    speed: &str,
    data_volume: &str,
    device_count: i64,
    cycle_type: &str,
) -> Result<String, PolicyError> {
    PolicyIdGenerator::default().generate_raw(segment, speed, data_volume, device_count, cycle_type)
}
