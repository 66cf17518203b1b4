use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use minilink::application::services::ShortenerService;
use minilink::domain::repositories::{CreateOutcome, UrlRepository};
use minilink::infrastructure::persistence::MemoryUrlRepository;

#[tokio::test]
async fn test_code_uniqueness_over_store_lifetime() {
    let repo = MemoryUrlRepository::new();

    let first = repo.create("https://first.com", "unique").await.unwrap();
    assert_eq!(first, CreateOutcome::Created);

    // Every later attempt collides, whatever URL it carries.
    for url in ["https://second.com", "https://third.com", "https://first.com"] {
        let outcome = repo.create(url, "unique").await.unwrap();
        assert_eq!(outcome, CreateOutcome::Collision);
    }

    let entry = repo.stats("unique").await.unwrap().unwrap();
    assert_eq!(entry.original_url, "https://first.com");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_resolve_after_create() {
    let repo = MemoryUrlRepository::new();

    repo.create("https://example.com/a", "abc123").await.unwrap();

    let url = repo.resolve("abc123").await.unwrap();
    assert_eq!(url.as_deref(), Some("https://example.com/a"));

    let entry = repo.stats("abc123").await.unwrap().unwrap();
    assert_eq!(entry.clicks, 1);
}

#[tokio::test]
async fn test_not_found_consistency() {
    let repo = MemoryUrlRepository::new();
    repo.create("https://example.com", "exists").await.unwrap();

    assert!(repo.resolve("never-created").await.unwrap().is_none());
    assert!(repo.stats("never-created").await.unwrap().is_none());

    // Failed lookups change nothing.
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.stats("exists").await.unwrap().unwrap().clicks, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_resolve_stress() {
    const RESOLVES: usize = 1500;

    let repo = Arc::new(MemoryUrlRepository::new());
    repo.create("https://example.com/hot", "hotkey").await.unwrap();

    let mut handles = Vec::with_capacity(RESOLVES);
    for _ in 0..RESOLVES {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.resolve("hotkey").await.unwrap().unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), "https://example.com/hot");
    }

    let entry = repo.stats("hotkey").await.unwrap().unwrap();
    assert_eq!(entry.clicks, RESOLVES as u64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_create_single_winner() {
    let repo = Arc::new(MemoryUrlRepository::new());
    let wins = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for i in 0..200 {
        let repo = Arc::clone(&repo);
        let wins = Arc::clone(&wins);
        handles.push(tokio::spawn(async move {
            let url = format!("https://example.com/{i}");
            if repo.create(&url, "contend").await.unwrap() == CreateOutcome::Created {
                wins.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(wins.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_full_flow_through_service() {
    let repository = Arc::new(MemoryUrlRepository::new());
    let service = ShortenerService::new(repository.clone());

    let code = service
        .shorten("https://example.com/a".to_string())
        .await
        .unwrap();

    let url = service.resolve(&code).await.unwrap();
    assert_eq!(url, "https://example.com/a");

    let entry = service.stats(&code).await.unwrap();
    assert_eq!(entry.original_url, "https://example.com/a");
    assert_eq!(entry.clicks, 1);

    // Distinct requests for the same URL allocate distinct codes.
    let other = service
        .shorten("https://example.com/a".to_string())
        .await
        .unwrap();
    assert_ne!(code, other);
    assert_eq!(repository.count().await.unwrap(), 2);
}
