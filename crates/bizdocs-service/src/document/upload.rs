//! Document upload service.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use bizdocs_core::config::StorageConfig;
use bizdocs_core::error::AppError;
use bizdocs_core::traits::StorageProvider;
use bizdocs_storage::filename::FilenamePolicy;

/// Upload input extracted from the multipart `document` part.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Client-supplied filename (empty when the client sent none).
    pub file_name: String,
    /// File content bytes.
    pub data: Bytes,
}

/// Validates and stores uploaded documents.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Document store.
    storage: Arc<dyn StorageProvider>,
    /// Extension allow list and name sanitation.
    policy: FilenamePolicy,
    /// Maximum document size in bytes.
    max_upload_size_bytes: u64,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(storage: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            storage,
            policy: FilenamePolicy::from_config(config),
            max_upload_size_bytes: config.max_upload_size_bytes,
        }
    }

    /// Stores a document under its sanitized name and returns that name.
    ///
    /// An existing document with the same name is overwritten.
    pub async fn upload(&self, params: UploadParams) -> Result<String, AppError> {
        let name = self.policy.upload_name(&params.file_name)?;

        if params.data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::payload_too_large(format!(
                "File exceeds maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let size = params.data.len();
        self.storage.write(&name, params.data).await?;

        info!(name = %name, size, "Document uploaded");
        Ok(name)
    }
}
