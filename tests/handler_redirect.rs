mod common;

use axum::{Router, routing::get};
use axum::http::StatusCode;
use axum_test::TestServer;
use slug_shortener::api::handlers::redirect_handler;
use std::sync::Arc;

use common::InMemoryLinkRepository;

fn server(repository: Arc<InMemoryLinkRepository>) -> TestServer {
    let app = Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(common::create_test_state(repository));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    repository.seed("aB3xY9", "https://example.com/target");
    let server = server(repository);

    let response = server.get("/aB3xY9").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    repository.seed("aB3xY9", "https://example.com/target");
    let server = server(repository);

    let response = server.get("/ab3xy9").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = server(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    response.assert_text("URL not found");
}

#[tokio::test]
async fn test_redirect_database_error() {
    let server = server(Arc::new(InMemoryLinkRepository::broken()));

    let response = server.get("/aB3xY9").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Database error");
}

#[tokio::test]
async fn test_redirect_keeps_query_string_of_target() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    repository.seed("q1w2e3", "https://example.com/search?q=rust&page=2#top");
    let server = server(repository);

    let response = server.get("/q1w2e3").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2#top"
    );
}

#[tokio::test]
async fn test_redirect_target_with_control_characters() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    repository.seed("bad001", "https://example.com/\r\nSet-Cookie: x=1");
    let server = server(repository);

    let response = server.get("/bad001").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
