use serde::{Deserialize, Serialize};

use super::baseline::BaselineOptionSets;
use super::cycle_rules::UnknownSegmentPolicy;
use crate::domain::a001_wifi_policy::{PolicyError, SegmentCodes};

/// Static engine tables, loaded once at startup and injected into
/// [`PolicyEngine`](super::PolicyEngine). Every section has a built-in
/// default, so an empty `[engine]` table is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyEngineConfig {
    pub unknown_segment: UnknownSegmentPolicy,
    pub segment_codes: SegmentCodes,
    pub baseline: BaselineOptionSets,
}

impl PolicyEngineConfig {
    pub fn validate(&self) -> Result<(), PolicyError> {
        self.segment_codes.validate()?;
        self.baseline.validate()
    }
}
