//! Adapter from the storage backend to the form controller's uploader trait.

use std::sync::Arc;

use async_trait::async_trait;
use recruit_core::models::{PortfolioFile, UploadReceipt};
use recruit_core::{PortfolioUploader, UploadError};
use recruit_storage::Storage;

/// Bridges `Arc<dyn Storage>` into the controller's `PortfolioUploader`
/// collaborator. The receipt's `file_id` is the storage key and `file_name`
/// is the unique stored name (the last key segment).
pub struct StoragePortfolioUploader {
    storage: Arc<dyn Storage>,
}

impl StoragePortfolioUploader {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PortfolioUploader for StoragePortfolioUploader {
    async fn upload(&self, file: &PortfolioFile) -> Result<UploadReceipt, UploadError> {
        let (key, url) = self
            .storage
            .upload(&file.file_name, &file.content_type, file.data.to_vec())
            .await
            .map_err(|err| {
                tracing::error!(
                    error = %err,
                    file_name = %file.file_name,
                    "Portfolio upload failed"
                );
                UploadError::new(err.to_string())
            })?;

        let file_name = key.rsplit('/').next().unwrap_or(&key).to_string();

        Ok(UploadReceipt {
            url,
            file_id: key,
            file_name,
        })
    }
}
