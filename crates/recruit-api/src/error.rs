//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recruit_core::{AppError, LogLevel};
use recruit_storage::StorageError;
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body. The relay wire contract fixes the shape to
/// `{ "error": string }`; `fields` is added only for validation rejections.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    pub fn with_fields(error: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            error: error.into(),
            fields: Some(fields),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from recruit-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Helper function to log errors based on their log level
fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorResponse::new(app_error.client_message()));

        (status, body).into_response()
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::UploadFailed(msg) => AppError::Storage(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::BackendError(msg) => AppError::Storage(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

impl From<axum::extract::multipart::MultipartError> for HttpAppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        HttpAppError(AppError::BadRequest(format!(
            "Invalid multipart request: {}",
            err
        )))
    }
}
