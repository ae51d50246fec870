//! Company registration and password login.

use std::sync::Arc;

use tracing::info;

use bizdocs_auth::password::PasswordHasher;
use bizdocs_core::error::AppError;
use bizdocs_database::repositories::company::CompanyRepository;
use bizdocs_entity::company::{Company, CreateCompany};

/// Registration input, already extracted from the request body.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Company display name.
    pub company_name: String,
    /// Login email.
    pub email: String,
    /// Tax registration number.
    pub gst_number: String,
    /// Plaintext password.
    pub password: String,
}

/// Login input.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Handles company account registration and login.
#[derive(Debug, Clone)]
pub struct CompanyService {
    /// Company repository.
    company_repo: Arc<CompanyRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(company_repo: Arc<CompanyRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            company_repo,
            hasher,
        }
    }

    /// Registers a new company.
    ///
    /// Duplicate email or tax ID surfaces as `Conflict` from the repository.
    pub async fn register(&self, req: RegisterRequest) -> Result<Company, AppError> {
        if [&req.company_name, &req.email, &req.gst_number, &req.password]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(AppError::validation("Missing fields"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let company = self
            .company_repo
            .create(&CreateCompany {
                company_name: req.company_name,
                email: req.email,
                gst_number: req.gst_number,
                password_hash,
            })
            .await?;

        info!(company_id = company.id, "Company registered");
        Ok(company)
    }

    /// Checks an email/password pair and returns the matching company.
    pub async fn login(&self, req: LoginRequest) -> Result<Company, AppError> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AppError::validation("Missing fields"));
        }

        let company = self
            .company_repo
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::not_registered("Please register first!"))?;

        if !self
            .hasher
            .verify_password(&req.password, &company.password_hash)?
        {
            info!(company_id = company.id, "Login rejected: bad password");
            return Err(AppError::invalid_credentials("Invalid credentials!"));
        }

        info!(company_id = company.id, "Company logged in");
        Ok(company)
    }
}
