use super::baseline::BaselineOptionSets;
use super::combination::{valid_combinations, FixedAttributes, ValidCombinations};
use super::config::PolicyEngineConfig;
use super::cycle_rules::{
    resolve_cycle_types, resolve_cycle_types_for_key, CycleRule, FormMode, SiteOverrides,
    UnknownSegmentPolicy,
};
use crate::domain::a001_wifi_policy::{
    DeviceCount, Policy, PolicyError, PolicyIdGenerator, PolicyIdParts,
};
use crate::enums::{CycleType, DataVolume, Segment, SpeedTier};

/// Facade over the engine components, built from a validated
/// [`PolicyEngineConfig`]. Holds no mutable state.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    generator: PolicyIdGenerator,
    baseline: BaselineOptionSets,
    unknown_segment: UnknownSegmentPolicy,
}

impl PolicyEngine {
    pub fn new(config: PolicyEngineConfig) -> Result<Self, PolicyError> {
        config.validate()?;
        Ok(Self {
            generator: PolicyIdGenerator::new(config.segment_codes)?,
            baseline: config.baseline,
            unknown_segment: config.unknown_segment,
        })
    }

    pub fn generator(&self) -> &PolicyIdGenerator {
        &self.generator
    }

    pub fn baseline(&self) -> &BaselineOptionSets {
        &self.baseline
    }

    pub fn unknown_segment_policy(&self) -> UnknownSegmentPolicy {
        self.unknown_segment
    }

    pub fn resolve_cycle_types(
        &self,
        segment: Segment,
        mode: FormMode,
        site: &SiteOverrides,
    ) -> CycleRule {
        resolve_cycle_types(segment, mode, site)
    }

    pub fn resolve_cycle_types_for_key(
        &self,
        key: &str,
        mode: FormMode,
        site: &SiteOverrides,
    ) -> Result<CycleRule, PolicyError> {
        resolve_cycle_types_for_key(key, mode, site, self.unknown_segment)
    }

    /// Segment key to enum, honouring the unknown-segment policy.
    /// `Ok(None)` means "unknown, carry on with generic defaults".
    pub fn segment_for_key(&self, key: &str) -> Result<Option<Segment>, PolicyError> {
        match (Segment::from_key(key), self.unknown_segment) {
            (Some(segment), _) => Ok(Some(segment)),
            (None, UnknownSegmentPolicy::Permissive) => Ok(None),
            (None, UnknownSegmentPolicy::Strict) => {
                Err(PolicyError::UnknownSegment(key.to_string()))
            }
        }
    }

    pub fn valid_combinations(
        &self,
        policies: &[Policy],
        fixed: &FixedAttributes,
        cycle_type: CycleType,
    ) -> ValidCombinations {
        valid_combinations(policies, fixed, cycle_type, &self.baseline)
    }

    pub fn generate_policy_id(
        &self,
        segment: Segment,
        speed: SpeedTier,
        data_volume: DataVolume,
        device_count: DeviceCount,
        cycle_type: CycleType,
    ) -> String {
        self.generator
            .generate(segment, speed, data_volume, device_count, cycle_type)
    }

    pub fn generate_policy_id_raw(
        &self,
        segment: &str,
        speed: &str,
        data_volume: &str,
        device_count: i64,
        cycle_type: &str,
    ) -> Result<String, PolicyError> {
        self.generator
            .generate_raw(segment, speed, data_volume, device_count, cycle_type)
    }

    pub fn parse_policy_id(&self, policy_id: &str) -> Result<PolicyIdParts, PolicyError> {
        self.generator.parse(policy_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_wifi_policy::SegmentCodes;

    #[test]
    fn test_invalid_config_rejected() {
        let config = PolicyEngineConfig {
            segment_codes: SegmentCodes {
                co_living: "COW".into(),
                ..SegmentCodes::default()
            },
            ..PolicyEngineConfig::default()
        };
        assert!(PolicyEngine::new(config).is_err());
    }

    #[test]
    fn test_segment_for_key_follows_policy() {
        let permissive = PolicyEngine::default();
        assert_eq!(permissive.segment_for_key("hotel"), Ok(Some(Segment::Hotel)));
        assert_eq!(permissive.segment_for_key("airport"), Ok(None));

        let strict = PolicyEngine::new(PolicyEngineConfig {
            unknown_segment: UnknownSegmentPolicy::Strict,
            ..PolicyEngineConfig::default()
        })
        .unwrap();
        assert_eq!(
            strict.segment_for_key("airport"),
            Err(PolicyError::UnknownSegment("airport".into()))
        );
    }

    #[test]
    fn test_generates_with_configured_codes() {
        let engine = PolicyEngine::new(PolicyEngineConfig {
            segment_codes: SegmentCodes {
                enterprise: "CORP".into(),
                ..SegmentCodes::default()
            },
            ..PolicyEngineConfig::default()
        })
        .unwrap();

        let id = engine
            .generate_policy_id_raw("enterprise", "50Mbps", "Unlimited", 3, "Monthly")
            .unwrap();
        assert_eq!(id, "CORP_WIFI_50Mbps_Unlimited_3Devices");
        assert_eq!(
            engine.parse_policy_id(&id).unwrap().segment,
            Segment::Enterprise
        );
    }
}
