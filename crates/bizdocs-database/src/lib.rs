//! # bizdocs-database
//!
//! SQLite connection management, embedded migrations, and the company
//! repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
