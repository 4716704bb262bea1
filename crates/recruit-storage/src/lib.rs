//! Storage abstraction for portfolio uploads.
//!
//! This crate provides the `Storage` trait and backends for S3 (including
//! S3-compatible providers) and the local filesystem. Object keys live
//! under the `portfolio/` prefix and are derived from the uploaded file
//! name plus a timestamp and a random suffix, so a re-uploaded file never
//! collides with an earlier one. Key generation is centralized in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::generate_object_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use recruit_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
