//! Application state shared across handlers.
//!
//! The state is split into sub-states so handlers can declare exactly what
//! they need: the upload relay only takes `StorageState`, which also keeps
//! its tests free of any database setup.

use std::sync::Arc;

use axum::extract::FromRef;
use recruit_core::Config;
use recruit_db::ApplicationRepository;
use recruit_storage::Storage;
use sqlx::PgPool;

/// Database sub-state
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub applications: ApplicationRepository,
}

/// Storage sub-state
#[derive(Clone)]
pub struct StorageState {
    pub storage: Arc<dyn Storage>,
    pub max_portfolio_size_bytes: usize,
}

/// Top-level application state
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub storage: StorageState,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: PgPool, storage: Arc<dyn Storage>, config: Config) -> Self {
        Self {
            db: DbState {
                applications: ApplicationRepository::new(pool.clone()),
                pool,
            },
            storage: StorageState {
                storage,
                max_portfolio_size_bytes: config.max_portfolio_size_bytes,
            },
            config,
        }
    }
}

impl FromRef<AppState> for DbState {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for StorageState {
    fn from_ref(state: &AppState) -> Self {
        state.storage.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
