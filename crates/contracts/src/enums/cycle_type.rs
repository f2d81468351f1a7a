use serde::{Deserialize, Serialize};
use std::fmt;

/// Период сброса лимита трафика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleType {
    Daily,
    Monthly,
}

impl CycleType {
    pub fn label(&self) -> &'static str {
        match self {
            CycleType::Daily => "Daily",
            CycleType::Monthly => "Monthly",
        }
    }

    pub fn all() -> Vec<CycleType> {
        vec![CycleType::Daily, CycleType::Monthly]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Daily" => Some(CycleType::Daily),
            "Monthly" => Some(CycleType::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
