//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns. The single
//! entity of this service is [`UrlEntry`], the record kept per short code.

pub mod url_entry;

pub use url_entry::UrlEntry;
