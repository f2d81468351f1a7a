use serde::{Deserialize, Serialize};

use crate::domain::a001_wifi_policy::PolicyError;
use crate::enums::{CycleType, Segment};

/// Режим формы пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Secondary attribute that decides the cycle type instead of the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleDerivation {
    ResidentType,
    MemberType,
}

/// What to do with a segment key that is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSegmentPolicy {
    /// Fall back to the generic Daily/Monthly, editable rule
    #[default]
    Permissive,
    Strict,
}

/// Site-level provisioning settings that affect cycle rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOverrides {
    pub miscellaneous_cycle: Option<CycleType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRule {
    pub allowed: Vec<CycleType>,
    pub editable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<CycleDerivation>,
}

impl CycleRule {
    fn both(editable: bool) -> Self {
        Self {
            allowed: vec![CycleType::Daily, CycleType::Monthly],
            editable,
            derived_from: None,
        }
    }

    fn locked(cycle_type: CycleType) -> Self {
        Self {
            allowed: vec![cycle_type],
            editable: false,
            derived_from: None,
        }
    }

    fn derived(derivation: CycleDerivation) -> Self {
        Self {
            derived_from: Some(derivation),
            ..Self::both(false)
        }
    }

    pub fn allows(&self, cycle_type: CycleType) -> bool {
        self.allowed.contains(&cycle_type)
    }

    /// Cycle a fresh form starts with: Monthly when offered, otherwise the
    /// single allowed cycle.
    pub fn default_cycle(&self) -> CycleType {
        if self.allows(CycleType::Monthly) {
            CycleType::Monthly
        } else {
            self.allowed.first().copied().unwrap_or(CycleType::Monthly)
        }
    }
}

impl Default for CycleRule {
    fn default() -> Self {
        Self::both(true)
    }
}

pub fn resolve_cycle_types(segment: Segment, mode: FormMode, site: &SiteOverrides) -> CycleRule {
    match segment {
        Segment::Pg => CycleRule::locked(CycleType::Monthly),
        Segment::Miscellaneous => {
            CycleRule::locked(site.miscellaneous_cycle.unwrap_or(CycleType::Monthly))
        }
        Segment::CoLiving => CycleRule::derived(CycleDerivation::ResidentType),
        Segment::CoWorking => CycleRule::derived(CycleDerivation::MemberType),
        // existing hotel users keep the cycle they were created with
        Segment::Hotel => CycleRule::both(mode == FormMode::Create),
        Segment::Enterprise | Segment::Office => CycleRule::both(true),
    }
}

/// Resolve from a raw segment key as it arrives from session/site context
pub fn resolve_cycle_types_for_key(
    key: &str,
    mode: FormMode,
    site: &SiteOverrides,
    unknown: UnknownSegmentPolicy,
) -> Result<CycleRule, PolicyError> {
    match (Segment::from_key(key), unknown) {
        (Some(segment), _) => Ok(resolve_cycle_types(segment, mode, site)),
        (None, UnknownSegmentPolicy::Permissive) => Ok(CycleRule::default()),
        (None, UnknownSegmentPolicy::Strict) => Err(PolicyError::UnknownSegment(key.to_string())),
    }
}
