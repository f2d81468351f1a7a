//! Secondary classifiers that drive the cycle type for Co-Living and
//! Co-Working users.

use serde::{Deserialize, Serialize};

/// Тип проживания (Co-Living)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidentType {
    #[serde(rename = "Long-Term")]
    LongTerm,
    #[serde(rename = "Short-Term")]
    ShortTerm,
}

/// Тип участника (Co-Working)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    Permanent,
    Temporary,
}
