//! Convenience result type alias for BizDocs.

use crate::error::AppError;

/// A specialized `Result` type for BizDocs operations.
pub type AppResult<T> = Result<T, AppError>;
