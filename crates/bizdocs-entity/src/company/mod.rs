//! Company account entity.

pub mod model;

pub use model::{Company, CreateCompany};
