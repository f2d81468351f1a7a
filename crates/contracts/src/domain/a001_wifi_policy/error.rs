use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::enums::{CycleType, Segment};

/// Attribute of a policy, used to point at the offending input in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyAttribute {
    Segment,
    ConnectionType,
    Speed,
    DataVolume,
    DeviceCount,
    CycleType,
}

impl PolicyAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::ConnectionType => "connectionType",
            Self::Speed => "speed",
            Self::DataVolume => "dataVolume",
            Self::DeviceCount => "deviceCount",
            Self::CycleType => "cycleType",
        }
    }
}

impl fmt::Display for PolicyAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ошибки движка политик
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Invalid policy attribute {attribute}: '{value}'")]
    InvalidPolicyAttribute {
        attribute: PolicyAttribute,
        value: String,
    },

    #[error("Unknown segment: '{0}'")]
    UnknownSegment(String),

    #[error("Malformed policy id: '{0}'")]
    MalformedPolicyId(String),

    #[error("Cycle type cannot be changed for {}", .segment.display_name())]
    CycleTypeLocked { segment: Segment },

    #[error("{classifier} does not apply to {}", .segment.display_name())]
    ClassifierNotApplicable {
        classifier: &'static str,
        segment: Segment,
    },

    #[error("Selection is incomplete: {0} is not selected")]
    SelectionIncomplete(PolicyAttribute),

    #[error("Duplicate policy {policy_id} for {cycle_type} cycle")]
    DuplicatePolicy {
        policy_id: String,
        cycle_type: CycleType,
    },

    #[error("Policy id mismatch: expected '{expected}', found '{found}'")]
    PolicyIdMismatch { expected: String, found: String },

    #[error("Policy segment {found} does not match catalog segment {expected}")]
    SegmentMismatch { expected: Segment, found: Segment },

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

impl PolicyError {
    pub fn invalid(attribute: PolicyAttribute, value: impl fmt::Display) -> Self {
        Self::InvalidPolicyAttribute {
            attribute,
            value: value.to_string(),
        }
    }
}
