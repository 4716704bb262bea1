//! Portfolio upload relay.
//!
//! Accepts one multipart file part named `image`, stores it through the
//! configured backend under a unique `portfolio/` key, and returns the
//! public URL. The response and error bodies are a fixed wire contract
//! that existing form clients depend on.

use axum::extract::{Multipart, State};
use axum::Json;
use recruit_core::AppError;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::StorageState;

/// Multipart part name the relay accepts the file under.
pub const UPLOAD_PART_NAME: &str = "image";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    /// Public URL of the stored file.
    pub url: String,
    /// Provider-side identifier (the storage key).
    pub file_id: String,
    /// Unique stored file name.
    pub file_name: String,
}

/// POST /api/upload
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "No file provided", body = ErrorResponse),
        (status = 413, description = "File exceeds the configured size limit", body = ErrorResponse),
        (status = 500, description = "Storage backend failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_portfolio(
    State(state): State<StorageState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_PART_NAME) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("portfolio").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        if data.is_empty() {
            return Err(AppError::BadRequest("No file provided".to_string()).into());
        }
        if data.len() > state.max_portfolio_size_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the maximum size of {} bytes",
                state.max_portfolio_size_bytes
            ))
            .into());
        }

        let (key, url) = state
            .storage
            .upload(&file_name, &content_type, data.to_vec())
            .await?;

        let stored_name = key.rsplit('/').next().unwrap_or(&key).to_string();

        tracing::info!(key = %key, size_bytes = data.len(), "Portfolio stored");

        return Ok(Json(UploadResponse {
            success: true,
            url,
            file_id: key,
            file_name: stored_name,
        }));
    }

    Err(AppError::BadRequest("No file provided".to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use recruit_storage::LocalStorage;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "XTESTBOUNDARY";

    async fn test_router(temp_dir: &TempDir) -> Router {
        let storage = LocalStorage::new(
            temp_dir.path(),
            "http://localhost:3000/media".to_string(),
        )
        .await
        .unwrap();
        let state = StorageState {
            storage: Arc::new(storage),
            max_portfolio_size_bytes: 1024 * 1024,
        };
        Router::new()
            .route("/api/upload", post(upload_portfolio))
            .with_state(state)
    }

    fn multipart_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn file_part(name: &str, filename: &str, content: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n{content}\r\n--{b}--\r\n",
            b = BOUNDARY,
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_returns_url_and_file_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let router = test_router(&temp_dir).await;

        let body = file_part(UPLOAD_PART_NAME, "resume.pdf", "%PDF-1.4 content");
        let response = router.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], serde_json::json!(true));
        let url = json["url"].as_str().unwrap();
        assert!(url.starts_with("http://localhost:3000/media/portfolio/resume-"));
        assert!(json["fileId"].as_str().unwrap().starts_with("portfolio/"));
        assert!(json["fileName"].as_str().unwrap().starts_with("resume-"));
    }

    #[tokio::test]
    async fn test_missing_file_part_returns_400_with_exact_body() {
        let temp_dir = TempDir::new().unwrap();
        let router = test_router(&temp_dir).await;

        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
            b = BOUNDARY,
        );
        let response = router.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "No file provided" }));
    }

    #[tokio::test]
    async fn test_empty_file_part_returns_400() {
        let temp_dir = TempDir::new().unwrap();
        let router = test_router(&temp_dir).await;

        let body = file_part(UPLOAD_PART_NAME, "resume.pdf", "");
        let response = router.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "No file provided" }));
    }

    #[tokio::test]
    async fn test_oversized_file_returns_413() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(
            temp_dir.path(),
            "http://localhost:3000/media".to_string(),
        )
        .await
        .unwrap();
        let state = StorageState {
            storage: Arc::new(storage),
            max_portfolio_size_bytes: 8,
        };
        let router = Router::new()
            .route("/api/upload", post(upload_portfolio))
            .with_state(state);

        let body = file_part(UPLOAD_PART_NAME, "resume.pdf", "more than eight bytes");
        let response = router.oneshot(multipart_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
