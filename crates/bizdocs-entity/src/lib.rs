//! # bizdocs-entity
//!
//! Domain entity models for BizDocs. Database rows derive `sqlx::FromRow`;
//! insert payloads are plain structs built by the service layer.

pub mod company;
