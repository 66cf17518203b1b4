#![allow(dead_code)]

use std::sync::Arc;

use minilink::application::services::ShortenerService;
use minilink::domain::repositories::{CreateOutcome, UrlRepository};
use minilink::infrastructure::persistence::MemoryUrlRepository;
use minilink::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Builds a fresh application state over an empty in-memory store.
///
/// Also returns the repository handle so tests can seed links with
/// deterministic codes and inspect the store directly.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository.clone()));

    let state = AppState::new(shortener, TEST_BASE_URL.to_string());

    (state, repository)
}

/// Seeds a link with a fixed code, panicking on collision.
pub async fn create_test_link(repository: &MemoryUrlRepository, code: &str, url: &str) {
    let outcome = repository.create(url, code).await.unwrap();
    assert_eq!(outcome, CreateOutcome::Created, "seed code already taken");
}
