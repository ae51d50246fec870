//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Stored document listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Document names.
    pub uploaded_files: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency is reachable, otherwise `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database reachable.
    pub database: bool,
    /// Document store reachable.
    pub storage: bool,
}
