//! Repository implementations for BizDocs entities.

pub mod company;

pub use company::CompanyRepository;
