//! Local filesystem storage provider.
//!
//! Every document is one regular file directly inside the root directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use bizdocs_core::error::{AppError, ErrorKind};
use bizdocs_core::result::AppResult;
use bizdocs_core::traits::storage::{ByteStream, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Directory holding all stored documents.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path,
    /// creating the directory if it does not exist.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Root directory of this provider.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a document name to its path, refusing anything that is not a
    /// single plain path component.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part == name => Some(self.root.join(part)),
            _ => None,
        }
    }

    fn resolve_existing(&self, name: &str) -> AppResult<PathBuf> {
        self.resolve(name)
            .ok_or_else(|| AppError::not_found(format!("File not found: {name}")))
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        let full_path = self
            .resolve(name)
            .ok_or_else(|| AppError::bad_request(format!("Invalid document name: {name}")))?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {name}"),
                e,
            )
        })?;

        debug!(name, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn read(&self, name: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve_existing(name)?;
        let file = fs::File::open(&full_path)
            .await
            .map_err(|e| map_open_error(e, name))?;

        if !file.metadata().await?.is_file() {
            return Err(AppError::not_found(format!("File not found: {name}")));
        }

        Ok(Box::pin(ReaderStream::new(file)))
    }

    async fn list(&self) -> AppResult<Vec<String>> {
        let mut names = Vec::new();
        let mut dir = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list directory: {}", self.root.display()),
                e,
            )
        })?;

        while let Some(entry) = dir.next_entry().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to read directory entry", e)
        })? {
            let entry_meta = entry.metadata().await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to get entry metadata", e)
            })?;
            if !entry_meta.is_file() {
                continue;
            }

            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }
}

fn map_open_error(e: std::io::Error, name: &str) -> AppError {
    if e.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("File not found: {name}"))
    } else {
        AppError::with_source(ErrorKind::Storage, format!("Failed to open file: {name}"), e)
    }
}
