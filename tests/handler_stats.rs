mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use minilink::api::handlers::{redirect_handler, stats_handler};
use minilink::domain::repositories::UrlRepository;

fn stats_app(state: minilink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_after_create_and_resolve() {
    let (state, repository) = common::create_test_state();
    let server = stats_app(state);

    common::create_test_link(&repository, "abc123", "https://example.com/a").await;

    let redirect = server.get("/abc123").await;
    assert_eq!(redirect.status_code(), 307);

    let response = server.get("/api/stats/abc123").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com/a");
    assert_eq!(json["clicks"], 1);
    assert!(json["created_at"].is_string());

    // RFC 3339 round-trip
    let created_at = json["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _repository) = common::create_test_state();
    let server = stats_app(state);

    let response = server.get("/api/stats/never-created").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_reads_are_idempotent() {
    let (state, repository) = common::create_test_state();
    let server = stats_app(state);

    common::create_test_link(&repository, "idem01", "https://example.com").await;
    server.get("/idem01").await;

    let first = server.get("/api/stats/idem01").await.json::<serde_json::Value>();
    let second = server.get("/api/stats/idem01").await.json::<serde_json::Value>();

    assert_eq!(first["clicks"], second["clicks"]);
    assert_eq!(first["created_at"], second["created_at"]);
}

#[tokio::test]
async fn test_duplicate_code_keeps_first_url() {
    let (state, repository) = common::create_test_state();
    let server = stats_app(state);

    common::create_test_link(&repository, "dup01", "https://x.com").await;

    use minilink::domain::repositories::CreateOutcome;
    let second = repository.create("https://y.com", "dup01").await.unwrap();
    assert_eq!(second, CreateOutcome::Collision);

    let response = server.get("/api/stats/dup01").await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://x.com");
}

#[tokio::test]
async fn test_stats_does_not_count_clicks() {
    let (state, repository) = common::create_test_state();
    let server = stats_app(state);

    common::create_test_link(&repository, "quiet1", "https://example.com").await;

    for _ in 0..5 {
        server.get("/api/stats/quiet1").await;
    }

    let entry = repository.stats("quiet1").await.unwrap().unwrap();
    assert_eq!(entry.clicks, 0);
}
