use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_wifi_policy::dto::{
    CatalogQuery, CycleRulesQuery, OptionsRequest, PolicyErrorResponse, PolicyIdRequest,
    PolicyIdResponse,
};
use contracts::domain::a001_wifi_policy::{Policy, PolicyError};
use contracts::shared::policy_engine::{CycleRule, ValidCombinations};

use crate::domain::a001_wifi_policy::repository::{self, PolicyStore};
use crate::domain::a001_wifi_policy::service;

type ApiError = (StatusCode, Json<PolicyErrorResponse>);

fn store() -> Result<&'static PolicyStore, ApiError> {
    repository::get_store().ok_or_else(|| {
        tracing::error!("Policy store is not initialized");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(PolicyErrorResponse {
                error: "Policy store is not initialized".to_string(),
            }),
        )
    })
}

fn policy_error(e: PolicyError) -> ApiError {
    let status = match e {
        PolicyError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    tracing::warn!("Policy request rejected: {}", e);
    (
        status,
        Json(PolicyErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// GET /api/wifi_policy/:site_id/cycle_rules
pub async fn cycle_rules(
    Path(site_id): Path<String>,
    Query(query): Query<CycleRulesQuery>,
) -> Result<Json<CycleRule>, ApiError> {
    service::cycle_rules(store()?, &site_id, &query)
        .map(Json)
        .map_err(policy_error)
}

/// GET /api/wifi_policy/:site_id/catalog
pub async fn catalog(
    Path(site_id): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Policy>>, ApiError> {
    service::catalog(store()?, &site_id, &query.segment)
        .map(Json)
        .map_err(policy_error)
}

/// POST /api/wifi_policy/:site_id/options
pub async fn options(
    Path(site_id): Path<String>,
    Json(request): Json<OptionsRequest>,
) -> Result<Json<ValidCombinations>, ApiError> {
    service::options(store()?, &site_id, &request)
        .map(Json)
        .map_err(policy_error)
}

/// POST /api/wifi_policy/policy_id
pub async fn policy_id(
    Json(request): Json<PolicyIdRequest>,
) -> Result<Json<PolicyIdResponse>, ApiError> {
    service::policy_id(store()?, &request)
        .map(Json)
        .map_err(policy_error)
}
