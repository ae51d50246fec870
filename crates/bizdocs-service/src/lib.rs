//! # bizdocs-service
//!
//! Business logic for BizDocs. Each service orchestrates repositories,
//! the password hasher, and the document store to implement one use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod company;
pub mod document;

pub use company::CompanyService;
pub use document::{DocumentService, DownloadService, UploadService};
