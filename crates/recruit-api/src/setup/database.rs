//! Database pool setup and migrations.

use std::time::Duration;

use anyhow::Context;
use recruit_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn setup_database(config: &Config) -> Result<PgPool, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connection established"
    );

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    Ok(pool)
}
