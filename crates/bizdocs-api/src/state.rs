//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use bizdocs_auth::password::PasswordHasher;
use bizdocs_core::config::AppConfig;
use bizdocs_core::traits::StorageProvider;
use bizdocs_database::repositories::company::CompanyRepository;
use bizdocs_service::company::CompanyService;
use bizdocs_service::document::DocumentService;

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database connection pool.
    pub db_pool: SqlitePool,
    /// Company registration and login.
    pub company_service: Arc<CompanyService>,
    /// Document upload, listing, and download.
    pub document_service: Arc<DocumentService>,
}

impl AppState {
    /// Wires repositories and services over an open pool and document store.
    pub fn new(
        config: Arc<AppConfig>,
        db_pool: SqlitePool,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        let company_repo = Arc::new(CompanyRepository::new(db_pool.clone()));
        let company_service = Arc::new(CompanyService::new(
            company_repo,
            Arc::new(PasswordHasher::new()),
        ));
        let document_service = Arc::new(DocumentService::new(storage, &config.storage));

        Self {
            config,
            db_pool,
            company_service,
            document_service,
        }
    }
}
