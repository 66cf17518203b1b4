//! Infrastructure layer implementing the domain contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation

pub mod persistence;
