//! Core traits defined in `bizdocs-core` and implemented by other crates.

pub mod storage;

pub use storage::{ByteStream, StorageProvider};
