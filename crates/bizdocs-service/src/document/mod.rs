//! Document upload, listing, and download.

pub mod download;
pub mod service;
pub mod upload;

pub use download::{DownloadResult, DownloadService};
pub use service::DocumentService;
pub use upload::{UploadParams, UploadService};
