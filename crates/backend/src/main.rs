pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::middleware;
    use contracts::shared::policy_engine::PolicyEngine;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    use crate::domain::a001_wifi_policy::{catalog_import, repository};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let engine =
        PolicyEngine::new(config.engine.clone()).context("Invalid [engine] configuration")?;
    tracing::info!(
        "Policy engine: unknown segments {:?}, {} device count options",
        engine.unknown_segment_policy(),
        engine.baseline().device_options().len()
    );

    let catalog_path = shared::config::get_catalog_path(&config)?;
    let imported = catalog_import::load_catalogs(&catalog_path, engine.generator())?;
    if imported.skipped > 0 {
        tracing::warn!(
            "{} catalog rows were rejected, see warnings above",
            imported.skipped
        );
    }

    let store = repository::PolicyStore::new(engine, imported.catalogs, config.site_overrides());
    tracing::info!(
        "Policy store ready: {} catalogs, {} site overrides",
        store.catalog_count(),
        config.sites.len()
    );
    repository::initialize(store)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid [server] host/port")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
