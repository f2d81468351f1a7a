use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип подключения. Все текущие политики выдаются только для WiFi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectionType {
    #[default]
    #[serde(rename = "WIFI")]
    Wifi,
}

impl ConnectionType {
    pub fn code(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "WIFI",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
