//! Selection state of the user form.
//!
//! Keeps the current picks and enforces the segment's cycle rules on every
//! change. It remembers nothing beyond the current values: options are
//! recomputed from scratch on each call.

use super::combination::{FixedAttributes, ValidCombinations};
use super::cycle_rules::{CycleRule, FormMode, SiteOverrides};
use super::derived::SecondaryClassifier;
use super::engine::PolicyEngine;
use crate::domain::a001_wifi_policy::{DeviceCount, Policy, PolicyAttribute, PolicyError};
use crate::enums::{CycleType, DataVolume, MemberType, ResidentType, Segment, SpeedTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySelection {
    segment: Segment,
    mode: FormMode,
    rule: CycleRule,
    cycle_type: CycleType,
    fixed: FixedAttributes,
    classifier: Option<SecondaryClassifier>,
}

impl PolicySelection {
    /// Empty selection for a new user
    pub fn start(
        engine: &PolicyEngine,
        segment: Segment,
        mode: FormMode,
        site: &SiteOverrides,
    ) -> Self {
        let rule = engine.resolve_cycle_types(segment, mode, site);
        let cycle_type = rule.default_cycle();
        Self {
            segment,
            mode,
            rule,
            cycle_type,
            fixed: FixedAttributes::default(),
            classifier: None,
        }
    }

    /// Selection pre-filled from an existing user's policy (edit mode).
    ///
    /// A classifier overrides the stored cycle. Without one the stored cycle
    /// must be allowed by the segment's rule.
    pub fn for_existing(
        engine: &PolicyEngine,
        policy: &Policy,
        classifier: Option<SecondaryClassifier>,
        site: &SiteOverrides,
    ) -> Result<Self, PolicyError> {
        let rule = engine.resolve_cycle_types(policy.segment, FormMode::Edit, site);

        let cycle_type = match classifier {
            Some(c) if !c.applies_to(policy.segment) => {
                return Err(PolicyError::ClassifierNotApplicable {
                    classifier: c.name(),
                    segment: policy.segment,
                });
            }
            Some(c) => c.cycle_type(),
            None => policy.cycle_type,
        };
        if !rule.allows(cycle_type) {
            return Err(PolicyError::invalid(PolicyAttribute::CycleType, cycle_type));
        }

        Ok(Self {
            segment: policy.segment,
            mode: FormMode::Edit,
            rule,
            cycle_type,
            fixed: FixedAttributes {
                speed: Some(policy.speed),
                data_volume: Some(policy.data_volume),
                device_count: Some(policy.device_count),
            },
            classifier,
        })
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn rule(&self) -> &CycleRule {
        &self.rule
    }

    pub fn cycle_type(&self) -> CycleType {
        self.cycle_type
    }

    pub fn fixed(&self) -> &FixedAttributes {
        &self.fixed
    }

    pub fn classifier(&self) -> Option<SecondaryClassifier> {
        self.classifier
    }

    /// Direct cycle change. Pinned values are kept even if they do not exist
    /// for the new cycle; the resolver falls back for them.
    pub fn set_cycle_type(&mut self, cycle_type: CycleType) -> Result<(), PolicyError> {
        if !self.rule.editable {
            return Err(PolicyError::CycleTypeLocked {
                segment: self.segment,
            });
        }
        if !self.rule.allows(cycle_type) {
            return Err(PolicyError::invalid(PolicyAttribute::CycleType, cycle_type));
        }
        self.cycle_type = cycle_type;
        Ok(())
    }

    pub fn set_classifier(&mut self, classifier: SecondaryClassifier) -> Result<(), PolicyError> {
        if !classifier.applies_to(self.segment) {
            return Err(PolicyError::ClassifierNotApplicable {
                classifier: classifier.name(),
                segment: self.segment,
            });
        }
        self.classifier = Some(classifier);
        self.cycle_type = classifier.cycle_type();
        Ok(())
    }

    pub fn set_resident_type(&mut self, resident_type: ResidentType) -> Result<(), PolicyError> {
        self.set_classifier(SecondaryClassifier::ResidentType(resident_type))
    }

    pub fn set_member_type(&mut self, member_type: MemberType) -> Result<(), PolicyError> {
        self.set_classifier(SecondaryClassifier::MemberType(member_type))
    }

    pub fn pin_speed(&mut self, speed: Option<SpeedTier>) {
        self.fixed.speed = speed;
    }

    pub fn pin_data_volume(&mut self, data_volume: Option<DataVolume>) {
        self.fixed.data_volume = data_volume;
    }

    pub fn pin_device_count(&mut self, device_count: Option<DeviceCount>) {
        self.fixed.device_count = device_count;
    }

    pub fn options(&self, engine: &PolicyEngine, policies: &[Policy]) -> ValidCombinations {
        engine.valid_combinations(policies, &self.fixed, self.cycle_type)
    }

    pub fn is_complete(&self) -> bool {
        self.fixed.speed.is_some()
            && self.fixed.data_volume.is_some()
            && self.fixed.device_count.is_some()
    }

    /// Policy ID for submit. Fails on the first open dimension.
    pub fn policy_id(&self, engine: &PolicyEngine) -> Result<String, PolicyError> {
        let speed = self
            .fixed
            .speed
            .ok_or(PolicyError::SelectionIncomplete(PolicyAttribute::Speed))?;
        let data_volume = self
            .fixed
            .data_volume
            .ok_or(PolicyError::SelectionIncomplete(PolicyAttribute::DataVolume))?;
        let device_count = self
            .fixed
            .device_count
            .ok_or(PolicyError::SelectionIncomplete(PolicyAttribute::DeviceCount))?;

        Ok(engine.generate_policy_id(
            self.segment,
            speed,
            data_volume,
            device_count,
            self.cycle_type,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_wifi_policy::PolicyIdGenerator;
    use crate::shared::policy_engine::OptionSource;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn devices(n: u8) -> DeviceCount {
        DeviceCount::new(n).unwrap()
    }

    fn policy(
        segment: Segment,
        speed: SpeedTier,
        data: DataVolume,
        count: u8,
        cycle: CycleType,
    ) -> Policy {
        Policy::new(
            &PolicyIdGenerator::default(),
            segment,
            speed,
            data,
            devices(count),
            cycle,
        )
    }

    fn co_living_catalog() -> Vec<Policy> {
        vec![
            policy(Segment::CoLiving, SpeedTier::Mbps50, DataVolume::Unlimited, 2, CycleType::Monthly),
            policy(Segment::CoLiving, SpeedTier::Mbps30, DataVolume::Gb100, 2, CycleType::Monthly),
            policy(Segment::CoLiving, SpeedTier::Mbps10, DataVolume::Gb10, 1, CycleType::Daily),
        ]
    }

    #[test]
    fn test_enterprise_submit() {
        let engine = PolicyEngine::default();
        let mut selection = PolicySelection::start(
            &engine,
            Segment::Enterprise,
            FormMode::Create,
            &SiteOverrides::default(),
        );
        assert_eq!(selection.cycle_type(), CycleType::Monthly);
        assert_eq!(
            selection.policy_id(&engine),
            Err(PolicyError::SelectionIncomplete(PolicyAttribute::Speed))
        );

        selection.pin_speed(Some(SpeedTier::Mbps50));
        selection.pin_data_volume(Some(DataVolume::Unlimited));
        assert!(!selection.is_complete());
        assert_eq!(
            selection.policy_id(&engine),
            Err(PolicyError::SelectionIncomplete(PolicyAttribute::DeviceCount))
        );

        selection.pin_device_count(Some(devices(3)));
        assert!(selection.is_complete());
        assert_eq!(
            selection.policy_id(&engine).unwrap(),
            "ENT_WIFI_50Mbps_Unlimited_3Devices"
        );
    }

    #[test]
    fn test_pg_cycle_cannot_change() {
        let engine = PolicyEngine::default();
        let mut selection =
            PolicySelection::start(&engine, Segment::Pg, FormMode::Create, &SiteOverrides::default());
        assert_eq!(selection.cycle_type(), CycleType::Monthly);
        assert_eq!(
            selection.set_cycle_type(CycleType::Daily),
            Err(PolicyError::CycleTypeLocked { segment: Segment::Pg })
        );
        assert_eq!(selection.cycle_type(), CycleType::Monthly);
    }

    #[test]
    fn test_hotel_edit_keeps_existing_cycle() {
        let engine = PolicyEngine::default();
        let existing = policy(Segment::Hotel, SpeedTier::Mbps20, DataVolume::Gb20, 2, CycleType::Daily);
        let mut selection =
            PolicySelection::for_existing(&engine, &existing, None, &SiteOverrides::default())
                .unwrap();

        assert_eq!(selection.mode(), FormMode::Edit);
        assert!(!selection.rule().editable);
        assert!(selection.set_cycle_type(CycleType::Monthly).is_err());
        assert_eq!(selection.policy_id(&engine).unwrap(), existing.policy_id);

        let mut fresh = PolicySelection::start(
            &engine,
            Segment::Hotel,
            FormMode::Create,
            &SiteOverrides::default(),
        );
        assert!(fresh.set_cycle_type(CycleType::Daily).is_ok());
        assert_eq!(fresh.cycle_type(), CycleType::Daily);
    }

    #[test]
    fn test_resident_type_drives_cycle() {
        let engine = PolicyEngine::default();
        let mut selection = PolicySelection::start(
            &engine,
            Segment::CoLiving,
            FormMode::Create,
            &SiteOverrides::default(),
        );

        assert!(selection.set_cycle_type(CycleType::Daily).is_err());
        selection.set_resident_type(ResidentType::ShortTerm).unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Daily);
        selection.set_resident_type(ResidentType::ShortTerm).unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Daily);

        assert_eq!(
            selection.set_member_type(MemberType::Permanent),
            Err(PolicyError::ClassifierNotApplicable {
                classifier: "memberType",
                segment: Segment::CoLiving,
            })
        );
    }

    #[test]
    fn test_resident_toggle_restores_monthly_options() {
        let engine = PolicyEngine::default();
        let catalog = co_living_catalog();
        let mut selection = PolicySelection::start(
            &engine,
            Segment::CoLiving,
            FormMode::Create,
            &SiteOverrides::default(),
        );

        selection.set_resident_type(ResidentType::LongTerm).unwrap();
        let before = selection.clone();
        let monthly = selection.options(&engine, &catalog);

        selection.set_resident_type(ResidentType::ShortTerm).unwrap();
        let daily = selection.options(&engine, &catalog);
        assert_eq!(daily.speeds.unwrap().values, vec![SpeedTier::Mbps10]);

        selection.set_resident_type(ResidentType::LongTerm).unwrap();
        assert_eq!(selection, before);
        assert_eq!(selection.cycle_type(), CycleType::Monthly);

        let restored = selection.options(&engine, &catalog);
        assert_eq!(restored, monthly);
        let speeds = restored.speeds.unwrap();
        assert_eq!(speeds.values, vec![SpeedTier::Mbps50, SpeedTier::Mbps30]);
        assert!(!speeds.values.contains(&SpeedTier::Mbps10));
    }

    #[test]
    fn test_member_type_drives_cycle() {
        let engine = PolicyEngine::default();
        let mut selection = PolicySelection::start(
            &engine,
            Segment::CoWorking,
            FormMode::Create,
            &SiteOverrides::default(),
        );
        selection.set_member_type(MemberType::Temporary).unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Daily);
        selection.set_member_type(MemberType::Permanent).unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Monthly);
    }

    #[test]
    fn test_stale_pin_after_cycle_change() {
        let engine = PolicyEngine::default();
        let catalog = co_living_catalog();
        let mut selection = PolicySelection::start(
            &engine,
            Segment::CoLiving,
            FormMode::Create,
            &SiteOverrides::default(),
        );
        selection.set_resident_type(ResidentType::LongTerm).unwrap();
        selection.pin_speed(Some(SpeedTier::Mbps50));

        // 50Mbps only exists for Monthly
        selection.set_resident_type(ResidentType::ShortTerm).unwrap();
        let options = selection.options(&engine, &catalog);
        let volumes = options.data_volumes.unwrap();
        assert_eq!(volumes.source, OptionSource::BaselineFallback);
        assert_eq!(volumes.values, DataVolume::all());
    }

    #[test]
    fn test_foreign_classifier_on_existing_rejected() {
        let engine = PolicyEngine::default();
        let existing = policy(Segment::Pg, SpeedTier::Mbps20, DataVolume::Gb20, 2, CycleType::Monthly);
        let result = PolicySelection::for_existing(
            &engine,
            &existing,
            Some(SecondaryClassifier::ResidentType(ResidentType::LongTerm)),
            &SiteOverrides::default(),
        );
        assert!(matches!(
            result,
            Err(PolicyError::ClassifierNotApplicable { .. })
        ));
    }

    #[test]
    fn test_existing_classifier_sets_cycle() {
        let engine = PolicyEngine::default();
        let site = SiteOverrides::default();
        let existing = policy(Segment::CoLiving, SpeedTier::Mbps50, DataVolume::Unlimited, 2, CycleType::Monthly);

        let selection = PolicySelection::for_existing(
            &engine,
            &existing,
            Some(SecondaryClassifier::ResidentType(ResidentType::ShortTerm)),
            &site,
        )
        .unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Daily);
        assert_eq!(selection.fixed().speed, Some(SpeedTier::Mbps50));

        let existing = policy(Segment::CoWorking, SpeedTier::Mbps10, DataVolume::Gb10, 1, CycleType::Daily);
        let selection = PolicySelection::for_existing(
            &engine,
            &existing,
            Some(SecondaryClassifier::MemberType(MemberType::Permanent)),
            &site,
        )
        .unwrap();
        assert_eq!(selection.cycle_type(), CycleType::Monthly);
    }

    #[test]
    fn test_existing_cycle_outside_rule_rejected() {
        let engine = PolicyEngine::default();
        let existing = policy(Segment::Pg, SpeedTier::Mbps20, DataVolume::Gb20, 2, CycleType::Daily);
        assert_eq!(
            PolicySelection::for_existing(&engine, &existing, None, &SiteOverrides::default()),
            Err(PolicyError::invalid(PolicyAttribute::CycleType, CycleType::Daily))
        );

        let existing = policy(
            Segment::Miscellaneous,
            SpeedTier::Mbps10,
            DataVolume::Gb10,
            1,
            CycleType::Monthly,
        );
        let daily_site = SiteOverrides {
            miscellaneous_cycle: Some(CycleType::Daily),
        };
        assert!(PolicySelection::for_existing(&engine, &existing, None, &daily_site).is_err());
        assert!(
            PolicySelection::for_existing(&engine, &existing, None, &SiteOverrides::default())
                .is_ok()
        );
    }

    fn enterprise_catalog() -> impl Strategy<Value = Vec<Policy>> {
        prop::collection::vec(
            (
                select(SpeedTier::all()),
                select(DataVolume::all()),
                1u8..=5,
                select(CycleType::all()),
            ),
            0..25,
        )
        .prop_map(|rows| {
            let mut policies: Vec<Policy> = Vec::new();
            for (speed, data, count, cycle) in rows {
                let p = policy(Segment::Enterprise, speed, data, count, cycle);
                if !policies.iter().any(|q| q.same_combination(&p)) {
                    policies.push(p);
                }
            }
            policies
        })
    }

    proptest! {
        #[test]
        fn narrowing_is_order_independent(
            catalog in enterprise_catalog(),
            speed in select(SpeedTier::all()),
            count in select(DeviceCount::all()),
            cycle in select(CycleType::all()),
        ) {
            let engine = PolicyEngine::default();
            let site = SiteOverrides::default();

            let speed_only = FixedAttributes::default().with_speed(speed);
            let count_only = FixedAttributes::default().with_device_count(count);
            let both = speed_only.with_device_count(count);

            let mut speed_first =
                PolicySelection::start(&engine, Segment::Enterprise, FormMode::Create, &site);
            speed_first.set_cycle_type(cycle).unwrap();
            speed_first.pin_speed(Some(speed));
            let after_speed = speed_first.options(&engine, &catalog);
            speed_first.pin_device_count(Some(count));

            let mut count_first =
                PolicySelection::start(&engine, Segment::Enterprise, FormMode::Create, &site);
            count_first.set_cycle_type(cycle).unwrap();
            count_first.pin_device_count(Some(count));
            let after_count = count_first.options(&engine, &catalog);
            count_first.pin_speed(Some(speed));

            // each step depends only on the pins held at that point
            prop_assert_eq!(
                after_speed,
                engine.valid_combinations(&catalog, &speed_only, cycle)
            );
            prop_assert_eq!(
                after_count,
                engine.valid_combinations(&catalog, &count_only, cycle)
            );

            let expected = engine.valid_combinations(&catalog, &both, cycle);
            prop_assert_eq!(speed_first.options(&engine, &catalog), expected.clone());
            prop_assert_eq!(count_first.options(&engine, &catalog), expected);
        }
    }
}
