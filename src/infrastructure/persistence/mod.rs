//! Concrete repository implementations.

pub mod memory_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
