//! Error types module
//!
//! All errors are unified under the `AppError` enum which can represent
//! database, storage, validation, and other domain-specific errors.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the
//! `sqlx` feature.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to at the API boundary.
    pub fn http_status_code(&self) -> u16 {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => 500,
            AppError::Storage(_) => 500,
            AppError::InvalidInput(_) => 400,
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Internal(_) => 500,
        }
    }

    /// Log level for this error.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::BadRequest(_) | AppError::NotFound(_) => {
                LogLevel::Debug
            }
            AppError::PayloadTooLarge(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Client-facing message, without the Display prefix. Response bodies
    /// carry the bare message (`{"error": "No file provided"}`), not the
    /// categorized form used for logging.
    pub fn client_message(&self) -> String {
        match self {
            #[cfg(feature = "sqlx")]
            AppError::Database(e) => e.to_string(),
            AppError::Storage(msg)
            | AppError::InvalidInput(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Internal(msg) => msg.clone(),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
