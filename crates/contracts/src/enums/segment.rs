use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer vertical of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "enterprise")]
    Enterprise,
    #[serde(rename = "office")]
    Office,
    #[serde(rename = "coLiving")]
    CoLiving,
    #[serde(rename = "coWorking")]
    CoWorking,
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "pg")]
    Pg,
    #[serde(rename = "miscellaneous")]
    Miscellaneous,
}

impl Segment {
    /// Ключ сегмента, как его присылает контекст сессии/сайта
    pub fn key(&self) -> &'static str {
        match self {
            Segment::Enterprise => "enterprise",
            Segment::Office => "office",
            Segment::CoLiving => "coLiving",
            Segment::CoWorking => "coWorking",
            Segment::Hotel => "hotel",
            Segment::Pg => "pg",
            Segment::Miscellaneous => "miscellaneous",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::Enterprise => "Enterprise",
            Segment::Office => "Office",
            Segment::CoLiving => "Co-Living",
            Segment::CoWorking => "Co-Working",
            Segment::Hotel => "Hotel",
            Segment::Pg => "PG",
            Segment::Miscellaneous => "Miscellaneous",
        }
    }

    /// Все сегменты
    pub fn all() -> Vec<Segment> {
        vec![
            Segment::Enterprise,
            Segment::Office,
            Segment::CoLiving,
            Segment::CoWorking,
            Segment::Hotel,
            Segment::Pg,
            Segment::Miscellaneous,
        ]
    }

    /// Парсинг из ключа
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "enterprise" => Some(Segment::Enterprise),
            "office" => Some(Segment::Office),
            "coLiving" => Some(Segment::CoLiving),
            "coWorking" => Some(Segment::CoWorking),
            "hotel" => Some(Segment::Hotel),
            "pg" => Some(Segment::Pg),
            "miscellaneous" => Some(Segment::Miscellaneous),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
