//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; the concrete implementation
//! lives in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit testing services.

pub mod url_repository;

pub use url_repository::{CreateOutcome, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
