mod common;

use axum::http::Method;
use axum_test::TestServer;
use serde_json::json;
use slug_shortener::routes::app_router;
use std::sync::Arc;

use common::InMemoryLinkRepository;

fn server() -> TestServer {
    let state = common::create_test_state(Arc::new(InMemoryLinkRepository::new()));
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_create_then_redirect() {
    let server = server();

    let response = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "https://example.com");
    let slug = json["slug"].as_str().unwrap();

    let response = server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let response = server().get("/doesnotexist").await;

    response.assert_status_not_found();
    response.assert_text("URL not found");
}

#[tokio::test]
async fn test_health_is_routed() {
    server().get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = server()
        .method(Method::OPTIONS, "/")
        .add_header("Origin", "https://app.example.com")
        .add_header("Access-Control-Request-Method", "POST")
        .add_header("Access-Control-Request-Headers", "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");

    let methods = response
        .header("access-control-allow-methods")
        .to_str()
        .unwrap()
        .to_string();
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let headers = response
        .header("access-control-allow-headers")
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(headers.contains("accept"));
    assert!(headers.contains("content-type"));
}

#[tokio::test]
async fn test_cors_header_on_simple_request() {
    let response = server()
        .get("/doesnotexist")
        .add_header("Origin", "https://app.example.com")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
