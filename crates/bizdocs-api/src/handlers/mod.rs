//! Route handlers organized by domain.

pub mod auth;
pub mod document;
pub mod health;

use bizdocs_core::error::AppError;

/// Fallback for unknown routes, so every error body is JSON.
pub async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
