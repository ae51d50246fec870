//! Company account registration and login.

pub mod service;

pub use service::{CompanyService, LoginRequest, RegisterRequest};
