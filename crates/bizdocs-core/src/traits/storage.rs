//! Blob-store trait for document storage backends.
//!
//! Documents are addressed by a flat, already-sanitized name. The trait is
//! the whole contract the service layer relies on, so an object store can
//! replace the local directory without touching the HTTP surface.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading document contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for document storage backends.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `name`, replacing any existing document.
    async fn write(&self, name: &str, data: Bytes) -> AppResult<()>;

    /// Open a document as a byte stream. Missing documents are `NotFound`.
    async fn read(&self, name: &str) -> AppResult<ByteStream>;

    /// Names of every stored document, in backend order.
    async fn list(&self) -> AppResult<Vec<String>>;
}
