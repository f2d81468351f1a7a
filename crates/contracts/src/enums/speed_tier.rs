use serde::{Deserialize, Serialize};
use std::fmt;

/// Скоростной тариф
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedTier {
    #[serde(rename = "10Mbps")]
    Mbps10,
    #[serde(rename = "20Mbps")]
    Mbps20,
    #[serde(rename = "30Mbps")]
    Mbps30,
    #[serde(rename = "50Mbps")]
    Mbps50,
    Unlimited,
}

impl SpeedTier {
    /// Label used both in dropdowns and inside policy IDs
    pub fn label(&self) -> &'static str {
        match self {
            SpeedTier::Mbps10 => "10Mbps",
            SpeedTier::Mbps20 => "20Mbps",
            SpeedTier::Mbps30 => "30Mbps",
            SpeedTier::Mbps50 => "50Mbps",
            SpeedTier::Unlimited => "Unlimited",
        }
    }

    pub fn all() -> Vec<SpeedTier> {
        vec![
            SpeedTier::Mbps10,
            SpeedTier::Mbps20,
            SpeedTier::Mbps30,
            SpeedTier::Mbps50,
            SpeedTier::Unlimited,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "10Mbps" => Some(SpeedTier::Mbps10),
            "20Mbps" => Some(SpeedTier::Mbps20),
            "30Mbps" => Some(SpeedTier::Mbps30),
            "50Mbps" => Some(SpeedTier::Mbps50),
            "Unlimited" => Some(SpeedTier::Unlimited),
            _ => None,
        }
    }
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
