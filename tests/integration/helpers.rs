//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use bizdocs_api::{AppState, build_router};
use bizdocs_core::config::AppConfig;
use bizdocs_database::connection::DatabasePool;
use bizdocs_database::migration::run_migrations;
use bizdocs_storage::providers::LocalStorageProvider;

const BOUNDARY: &str = "bizdocs-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
    /// Application config
    pub config: AppConfig,
    /// Directory the document store writes to
    pub upload_dir: PathBuf,
    /// Owns the database file and uploads; removed on drop
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application with default settings
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.database.url = format!("sqlite:{}", dir.path().join("companies.db").display());
        config.storage.upload_dir = dir.path().join("uploads").display().to_string();
        adjust(&mut config);

        let database = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");
        let db_pool = database.into_pool();

        run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let storage = LocalStorageProvider::new(&config.storage.upload_dir)
            .await
            .expect("Failed to init storage");
        let upload_dir = storage.root().to_path_buf();

        let state = AppState::new(Arc::new(config.clone()), db_pool.clone(), Arc::new(storage));
        let router = build_router(state);

        Self {
            router,
            db_pool,
            config,
            upload_dir,
            dir,
        }
    }

    /// Register the Acme test company
    pub async fn register_acme(&self) -> TestResponse {
        self.request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "company_name": "Acme",
                "email": "a@x.com",
                "gst_number": "GST1",
                "password": "secret",
            })),
        )
        .await
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await.into()
    }

    /// Upload one multipart part named `field`, optionally with a filename
    pub async fn upload(&self, field: &str, file_name: Option<&str>, data: &[u8]) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(field, file_name, data)))
            .expect("Failed to build request");

        self.send(req).await.into()
    }

    /// GET a path and return the raw response
    pub async fn get_raw(&self, path: &str) -> RawResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send an arbitrary request
    pub async fn send(&self, req: Request<Body>) -> RawResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        RawResponse {
            status,
            headers,
            body,
        }
    }

    /// Number of stored companies
    pub async fn company_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count companies")
    }
}

/// Build a multipart/form-data body with a single part
pub fn multipart_body(field: &str, file_name: Option<&str>, data: &[u8]) -> Vec<u8> {
    let disposition = match file_name {
        Some(name) => format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, name
        ),
        None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", field),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(disposition.as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Response with the body parsed as JSON
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Response with headers and raw body bytes
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body bytes
    pub body: Vec<u8>,
}

impl From<RawResponse> for TestResponse {
    fn from(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            body: serde_json::from_slice(&raw.body).unwrap_or(Value::Null),
        }
    }
}
