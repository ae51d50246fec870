//! Document service facade: upload, listing, and download over one store.

use std::sync::Arc;

use bizdocs_core::config::StorageConfig;
use bizdocs_core::error::AppError;
use bizdocs_core::traits::StorageProvider;
use bizdocs_storage::filename::FilenamePolicy;

use super::download::{DownloadResult, DownloadService};
use super::upload::{UploadParams, UploadService};

/// Entry point for every document operation.
#[derive(Debug, Clone)]
pub struct DocumentService {
    storage: Arc<dyn StorageProvider>,
    upload: UploadService,
    download: DownloadService,
}

impl DocumentService {
    /// Creates a document service over the given store.
    pub fn new(storage: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            upload: UploadService::new(Arc::clone(&storage), config),
            download: DownloadService::new(
                Arc::clone(&storage),
                FilenamePolicy::from_config(config),
            ),
            storage,
        }
    }

    /// Stores a document; returns the sanitized name it was saved under.
    pub async fn upload(&self, params: UploadParams) -> Result<String, AppError> {
        self.upload.upload(params).await
    }

    /// Names of all stored documents, in store order.
    pub async fn list_names(&self) -> Result<Vec<String>, AppError> {
        self.storage.list().await
    }

    /// Opens a document by exact name.
    pub async fn download(&self, filename: &str) -> Result<DownloadResult, AppError> {
        self.download.download(filename).await
    }

    /// Whether the underlying store is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.storage.health_check().await.unwrap_or(false)
    }
}
