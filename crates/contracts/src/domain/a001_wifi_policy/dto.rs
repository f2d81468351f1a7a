use serde::{Deserialize, Serialize};

use crate::enums::CycleType;
use crate::shared::policy_engine::{FixedAttributes, FormMode};

/// GET /api/wifi_policy/:site_id/cycle_rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRulesQuery {
    pub segment: String,
    #[serde(default)]
    pub mode: FormMode,
}

/// GET /api/wifi_policy/:site_id/catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub segment: String,
}

/// POST /api/wifi_policy/:site_id/options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRequest {
    pub segment: String,
    pub cycle_type: CycleType,
    #[serde(default)]
    pub fixed: FixedAttributes,
}

/// POST /api/wifi_policy/policy_id
///
/// Raw values on purpose: domain checks happen in the generator so a bad
/// value comes back as `InvalidPolicyAttribute` instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyIdRequest {
    pub segment: String,
    pub speed: String,
    pub data_volume: String,
    pub device_count: i64,
    pub cycle_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyIdResponse {
    pub policy_id: String,
}

/// Error body for 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyErrorResponse {
    pub error: String,
}
