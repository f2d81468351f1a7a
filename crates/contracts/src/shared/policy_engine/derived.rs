//! Cycle type derived from resident type (Co-Living) or member type
//! (Co-Working). The derivation is one-way: it runs every time the driving
//! attribute changes and overwrites whatever cycle was there before.

use serde::{Deserialize, Serialize};

use crate::enums::{CycleType, MemberType, ResidentType, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SecondaryClassifier {
    ResidentType(ResidentType),
    MemberType(MemberType),
}

impl SecondaryClassifier {
    pub fn cycle_type(&self) -> CycleType {
        match self {
            Self::ResidentType(ResidentType::LongTerm) => CycleType::Monthly,
            Self::ResidentType(ResidentType::ShortTerm) => CycleType::Daily,
            Self::MemberType(MemberType::Permanent) => CycleType::Monthly,
            Self::MemberType(MemberType::Temporary) => CycleType::Daily,
        }
    }

    pub fn applies_to(&self, segment: Segment) -> bool {
        matches!(
            (self, segment),
            (Self::ResidentType(_), Segment::CoLiving) | (Self::MemberType(_), Segment::CoWorking)
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ResidentType(_) => "residentType",
            Self::MemberType(_) => "memberType",
        }
    }
}
