//! # bizdocs-storage
//!
//! Document storage for BizDocs: the local-directory provider and the
//! filename policy that decides which names may be stored or served.

pub mod filename;
pub mod providers;

pub use filename::{FilenamePolicy, sanitize_filename};
pub use providers::LocalStorageProvider;
