//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::MemoryUrlRepository;

/// Handler-visible application state.
///
/// Constructed once at startup and cloned per request. The store lives inside
/// the service behind an `Arc`, so clones share one mapping table. Tests
/// construct their own state with a fresh store for isolation.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<MemoryUrlRepository>>,
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService<MemoryUrlRepository>>, base_url: String) -> Self {
        Self {
            shortener,
            base_url,
        }
    }
}
