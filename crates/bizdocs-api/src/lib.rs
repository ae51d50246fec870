//! # bizdocs-api
//!
//! HTTP API layer for BizDocs built on Axum.
//!
//! Provides the registration, login, and document endpoints, the JSON body
//! extractor, DTOs, and CORS and request-logging middleware. Handlers return
//! [`AppError`](bizdocs_core::AppError), which renders itself as a JSON
//! error response.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
