//! Configuration module
//!
//! Environment-driven configuration for the API service: server, database,
//! and storage settings. Loaded once at process start and passed down
//! explicitly; there is no hidden global state.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
// Portfolio uploads are small documents or images.
const DEFAULT_MAX_PORTFOLIO_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub log_json: bool,
    // Database
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Storage
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Uploads
    pub max_portfolio_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; real environment wins
        dotenvy::dotenv().ok();

        let storage_backend = match env_opt("STORAGE_BACKEND") {
            Some(raw) => Some(
                StorageBackend::from_str(&raw).map_err(|e| anyhow::anyhow!("{}", e))?,
            ),
            None => None,
        };

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env_list("CORS_ORIGINS"),
            log_json: env_parse("LOG_JSON", false),
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_CONNECTION_TIMEOUT_SECS),
            storage_backend,
            s3_bucket: env_opt("S3_BUCKET"),
            s3_region: env_opt("S3_REGION"),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            aws_region: env_opt("AWS_REGION"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            local_storage_base_url: env_opt("LOCAL_STORAGE_BASE_URL"),
            max_portfolio_size_bytes: env_parse(
                "MAX_PORTFOLIO_SIZE_BYTES",
                DEFAULT_MAX_PORTFOLIO_SIZE_BYTES,
            ),
        })
    }

    /// Fail fast on misconfiguration before any connection is attempted.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.database_url.is_empty() {
            anyhow::bail!("DATABASE_URL must be set");
        }
        match self.storage_backend.unwrap_or(StorageBackend::S3) {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    anyhow::bail!("S3_BUCKET must be set for the s3 storage backend");
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    anyhow::bail!(
                        "S3_REGION or AWS_REGION must be set for the s3 storage backend"
                    );
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL must be set for the local storage backend"
                    );
                }
            }
        }
        if self.max_portfolio_size_bytes == 0 {
            anyhow::bail!("MAX_PORTFOLIO_SIZE_BYTES must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_list(name: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
