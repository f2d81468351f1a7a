use serde::Serialize;

use super::aggregate::{DeviceCount, Policy};
use super::error::PolicyError;
use super::policy_id::PolicyIdGenerator;
use crate::enums::{CycleType, DataVolume, Segment, SpeedTier};

/// Policies provisioned for one (site, segment) pair.
///
/// Filled once during site provisioning; the engine only reads it. Row order
/// carries no meaning beyond being the order options are offered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePolicyCatalog {
    site_id: String,
    segment: Segment,
    policies: Vec<Policy>,
}

impl SitePolicyCatalog {
    pub fn new(site_id: impl Into<String>, segment: Segment) -> Self {
        Self {
            site_id: site_id.into(),
            segment,
            policies: Vec::new(),
        }
    }

    pub fn from_policies(
        site_id: impl Into<String>,
        segment: Segment,
        policies: Vec<Policy>,
        generator: &PolicyIdGenerator,
    ) -> Result<Self, PolicyError> {
        let mut catalog = Self::new(site_id, segment);
        for policy in policies {
            catalog.insert(policy, generator)?;
        }
        Ok(catalog)
    }

    /// Add a provisioned policy.
    ///
    /// Rejects policies of another segment, IDs that drift from the
    /// generator, and a second row for an already present combination.
    pub fn insert(
        &mut self,
        policy: Policy,
        generator: &PolicyIdGenerator,
    ) -> Result<(), PolicyError> {
        if policy.segment != self.segment {
            return Err(PolicyError::SegmentMismatch {
                expected: self.segment,
                found: policy.segment,
            });
        }
        policy.verify_id(generator)?;
        if self.policies.iter().any(|p| p.same_combination(&policy)) {
            return Err(PolicyError::DuplicatePolicy {
                policy_id: policy.policy_id,
                cycle_type: policy.cycle_type,
            });
        }
        self.policies.push(policy);
        Ok(())
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn for_cycle(&self, cycle_type: CycleType) -> impl Iterator<Item = &Policy> + '_ {
        self.policies
            .iter()
            .filter(move |p| p.cycle_type == cycle_type)
    }

    /// IDs do not encode the cycle type, so the lookup needs it
    pub fn find_by_id(&self, policy_id: &str, cycle_type: CycleType) -> Option<&Policy> {
        self.for_cycle(cycle_type).find(|p| p.policy_id == policy_id)
    }

    pub fn find(
        &self,
        speed: SpeedTier,
        data_volume: DataVolume,
        device_count: DeviceCount,
        cycle_type: CycleType,
    ) -> Option<&Policy> {
        self.for_cycle(cycle_type).find(|p| {
            p.speed == speed && p.data_volume == data_volume && p.device_count == device_count
        })
    }
}
