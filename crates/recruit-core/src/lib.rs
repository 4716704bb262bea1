//! Core domain types for the recruitment form service.
//!
//! This crate holds the application draft model, the static option tables
//! rendered into the form, configuration, error types, and the form
//! submission controller with its collaborator traits. It contains no HTTP
//! or SQL; those live in `recruit-api`, `recruit-db`, and `recruit-storage`.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use controller::{
    ApplicationDraft, ApplicationInserter, FormController, InsertError, PortfolioUploader,
    SubmissionStatus, SubmitOutcome, UploadError, ValidationState,
};
pub use error::{AppError, LogLevel};
pub use storage_types::StorageBackend;
