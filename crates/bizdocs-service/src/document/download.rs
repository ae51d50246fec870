//! Document download service: resolves a requested name and opens a stream.

use std::sync::Arc;

use tracing::debug;

use bizdocs_core::error::{AppError, ErrorKind};
use bizdocs_core::traits::{ByteStream, StorageProvider};
use bizdocs_storage::filename::FilenamePolicy;

/// Opens stored documents for download.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Document store.
    storage: Arc<dyn StorageProvider>,
    /// Name containment check shared with uploads.
    policy: FilenamePolicy,
}

/// An opened document ready to be streamed to the client.
pub struct DownloadResult {
    /// Name for the Content-Disposition header.
    pub filename: String,
    /// MIME type for the Content-Type header.
    pub content_type: String,
    /// Document content.
    pub stream: ByteStream,
}

impl std::fmt::Debug for DownloadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadResult")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(storage: Arc<dyn StorageProvider>, policy: FilenamePolicy) -> Self {
        Self { storage, policy }
    }

    /// Opens the document with exactly this name.
    pub async fn download(&self, filename: &str) -> Result<DownloadResult, AppError> {
        let name = self.policy.download_name(filename)?;

        let stream = self.storage.read(name).await.map_err(|e| {
            if e.kind == ErrorKind::NotFound {
                AppError::not_found("File not found")
            } else {
                e
            }
        })?;

        debug!(name, "Serving document");
        Ok(DownloadResult {
            filename: name.to_string(),
            content_type: mime_guess::from_path(name)
                .first_or_octet_stream()
                .to_string(),
            stream,
        })
    }
}
