//! # bizdocs-auth
//!
//! Credential handling for BizDocs company accounts.
//!
//! - `password`: Argon2id salted hashing and verification

pub mod password;

pub use password::PasswordHasher;
