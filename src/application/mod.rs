//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. The single service of this crate is
//! [`services::shortener_service::ShortenerService`], which owns the
//! code-generation retry protocol on top of the mapping store.

pub mod services;
