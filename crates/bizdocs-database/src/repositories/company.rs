//! Company repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use bizdocs_core::error::{AppError, ErrorKind};
use bizdocs_core::result::AppResult;
use bizdocs_entity::company::{Company, CreateCompany};

/// Message returned when either unique column is already taken.
pub const DUPLICATE_COMPANY: &str = "Company already registered!";

/// Repository for company account rows.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    /// Create a new company repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a company by its exact login email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Company>> {
        sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find company by email", e)
            })
    }

    /// Insert a new company.
    ///
    /// Uniqueness of `email` and `gst_number` is decided by the table's
    /// UNIQUE constraints, so two racing inserts cannot both succeed; the
    /// loser gets a `Conflict` error.
    pub async fn create(&self, data: &CreateCompany) -> AppResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (company_name, email, gst_number, password_hash, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING *",
        )
        .bind(&data.company_name)
        .bind(&data.email)
        .bind(&data.gst_number)
        .bind(&data.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(DUPLICATE_COMPANY)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create company", e),
        })
    }

}
