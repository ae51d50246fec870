//! Request DTOs with validation.
//!
//! Absent fields deserialize to empty strings so that a missing key and an
//! empty value are rejected the same way.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bizdocs_service::company::{LoginRequest as LoginInput, RegisterRequest as RegisterInput};

/// Registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// Company display name.
    #[validate(length(min = 1, message = "company_name is required"))]
    pub company_name: String,
    /// Login email.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Tax registration number.
    #[validate(length(min = 1, message = "gst_number is required"))]
    pub gst_number: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            company_name: req.company_name,
            email: req.email,
            gst_number: req.gst_number,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}
