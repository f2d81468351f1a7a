use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 WIFI POLICY
        // ========================================
        .route(
            "/api/wifi_policy/policy_id",
            post(handlers::a001_wifi_policy::policy_id),
        )
        .route(
            "/api/wifi_policy/:site_id/cycle_rules",
            get(handlers::a001_wifi_policy::cycle_rules),
        )
        .route(
            "/api/wifi_policy/:site_id/catalog",
            get(handlers::a001_wifi_policy::catalog),
        )
        .route(
            "/api/wifi_policy/:site_id/options",
            post(handlers::a001_wifi_policy::options),
        )
}
