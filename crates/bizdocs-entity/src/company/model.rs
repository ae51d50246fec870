//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered company account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    /// Surrogate primary key assigned by the database.
    pub id: i64,
    /// Display name used in the login greeting.
    pub company_name: String,
    /// Login email. Unique across all companies.
    pub email: String,
    /// Tax registration number. Unique across all companies.
    pub gst_number: String,
    /// Argon2id PHC hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new company.
#[derive(Debug, Clone)]
pub struct CreateCompany {
    /// Company display name.
    pub company_name: String,
    /// Login email.
    pub email: String,
    /// Tax registration number.
    pub gst_number: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
