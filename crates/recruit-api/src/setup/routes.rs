//! Route configuration and middleware layering.

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use recruit_core::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Headroom for multipart framing and the text fields around the file.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn setup_routes(config: &Config, state: AppState) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;
    let body_limit = config.max_portfolio_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let router = Router::new()
        .route("/", get(handlers::pages::form_page))
        .route("/thank-you", get(handlers::pages::thank_you_page))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness_check))
        .route("/api/upload", post(handlers::upload::upload_portfolio))
        .route(
            "/api/applications",
            post(handlers::application::submit_application),
        )
        .with_state(state)
        .merge(RapiDoc::with_openapi("/api/openapi.json", ApiDoc::openapi()).path("/docs"))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST];

    if config.cors_origins.is_empty() {
        Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any))
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any))
    }
}
