//! # minilink
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory mapping store
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Fixed-length random short codes with bounded collision retry
//! - Linearizable click counting under concurrent redirects
//! - Per-link statistics (URL, clicks, creation time)
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://sho.rt"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! The mapping table lives entirely in process memory; restarting the service
//! discards all links by design.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::UrlEntry;
    pub use crate::domain::repositories::{CreateOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryUrlRepository;
    pub use crate::state::AppState;
}
