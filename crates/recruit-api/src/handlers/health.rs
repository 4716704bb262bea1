//! Health endpoints.
//!
//! `/health/live` answers as soon as the process serves requests;
//! `/health` also probes the database and the storage backend, each under
//! a timeout so a hung dependency cannot hang the endpoint.

use std::future::Future;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health/live
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = run_check("database", check_database(&state)).await;
    let storage = run_check("storage", check_storage(&state)).await;

    let healthy = database.healthy && storage.healthy;
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            checks: vec![database, storage],
        }),
    )
}

async fn run_check(
    name: &'static str,
    check: impl Future<Output = Result<(), String>>,
) -> CheckResult {
    match tokio::time::timeout(CHECK_TIMEOUT, check).await {
        Ok(Ok(())) => CheckResult {
            name,
            healthy: true,
            error: None,
        },
        Ok(Err(error)) => {
            tracing::warn!(check = name, error = %error, "Health check failed");
            CheckResult {
                name,
                healthy: false,
                error: Some(error),
            }
        }
        Err(_) => {
            tracing::warn!(check = name, "Health check timed out");
            CheckResult {
                name,
                healthy: false,
                error: Some(format!("timed out after {:?}", CHECK_TIMEOUT)),
            }
        }
    }
}

async fn check_database(state: &AppState) -> Result<(), String> {
    sqlx::query("SELECT 1")
        .execute(&state.db.pool)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

async fn check_storage(state: &AppState) -> Result<(), String> {
    // Any answer (even "not found") proves the backend is reachable.
    state
        .storage
        .storage
        .exists("portfolio/.healthcheck")
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
