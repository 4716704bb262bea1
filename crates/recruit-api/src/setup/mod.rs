//! Process wiring: telemetry, database, storage, routes, and the server.

pub mod database;
pub mod routes;
pub mod server;
pub mod telemetry;

use anyhow::Context;
use axum::Router;
use recruit_core::Config;

use crate::state::AppState;

/// Validate configuration, bring up every dependency, and build the router.
pub async fn initialize_app(config: Config) -> Result<(AppState, Router), anyhow::Error> {
    config
        .validate()
        .context("Configuration validation failed")?;

    telemetry::init_tracing(&config);

    tracing::info!(environment = %config.environment, "Starting recruit-api");

    let pool = database::setup_database(&config).await?;

    let storage = recruit_storage::create_storage(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage: {}", e))?;
    tracing::info!(backend = %storage.backend_type(), "Storage backend ready");

    let state = AppState::new(pool, storage, config.clone());
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
