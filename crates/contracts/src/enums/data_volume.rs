use serde::{Deserialize, Serialize};
use std::fmt;

/// Объём трафика за цикл
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataVolume {
    #[serde(rename = "10GB")]
    Gb10,
    #[serde(rename = "20GB")]
    Gb20,
    #[serde(rename = "50GB")]
    Gb50,
    #[serde(rename = "100GB")]
    Gb100,
    Unlimited,
}

impl DataVolume {
    /// Label used both in dropdowns and inside policy IDs
    pub fn label(&self) -> &'static str {
        match self {
            DataVolume::Gb10 => "10GB",
            DataVolume::Gb20 => "20GB",
            DataVolume::Gb50 => "50GB",
            DataVolume::Gb100 => "100GB",
            DataVolume::Unlimited => "Unlimited",
        }
    }

    pub fn all() -> Vec<DataVolume> {
        vec![
            DataVolume::Gb10,
            DataVolume::Gb20,
            DataVolume::Gb50,
            DataVolume::Gb100,
            DataVolume::Unlimited,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "10GB" => Some(DataVolume::Gb10),
            "20GB" => Some(DataVolume::Gb20),
            "50GB" => Some(DataVolume::Gb50),
            "100GB" => Some(DataVolume::Gb100),
            "Unlimited" => Some(DataVolume::Unlimited),
            _ => None,
        }
    }
}

impl fmt::Display for DataVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
