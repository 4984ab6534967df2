mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink::api::dto::info::InfoResponse;
use shortlink::api::dto::shorten::CreateUrlResponse;
use shortlink::infrastructure::persistence::InMemoryMappingRepository;
use std::sync::Arc;

fn create_server() -> (TestServer, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let strategy = Arc::new(common::app_cache(&repo, 100));
    let app = common::create_test_app(common::create_test_state(strategy));
    (TestServer::new(app).unwrap(), repo)
}

#[tokio::test]
async fn test_create_url_generates_code() {
    let (server, repo) = create_server();

    let response = server
        .post("/urls")
        .json(&json!({ "original_url": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: CreateUrlResponse = response.json();
    assert_eq!(body.short_code.len(), 6);
    assert_eq!(body.original_url, "https://example.com/page");
    assert_eq!(body.short_url, format!("http://localhost:8000/{}", body.short_code));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_url_with_custom_code() {
    let (server, _repo) = create_server();

    let response = server
        .post("/urls")
        .json(&json!({ "original_url": "https://example.com", "short_code": "promo" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: CreateUrlResponse = response.json();
    assert_eq!(body.short_code, "promo");
}

#[tokio::test]
async fn test_create_url_invalid_url() {
    let (server, repo) = create_server();

    let response = server
        .post("/urls")
        .json(&json!({ "original_url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_url_duplicate_code() {
    let (server, _repo) = create_server();

    server
        .post("/urls")
        .json(&json!({ "original_url": "https://first.com", "short_code": "taken1" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/urls")
        .json(&json!({ "original_url": "https://second.com", "short_code": "taken1" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, _repo) = create_server();

    let created: CreateUrlResponse = server
        .post("/urls")
        .json(&json!({ "original_url": "https://example.com/target" }))
        .await
        .json();

    let response = server.get(&format!("/{}", created.short_code)).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = create_server();

    let response = server.get("/nope00").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let (server, repo) = create_server();
    repo.set_unavailable(true);

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_info_reports_strategy() {
    let (server, _repo) = create_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: InfoResponse = response.json();
    assert_eq!(body.strategy, "APP_CACHE");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_create_url_rejects_non_http_schemes() {
    let (server, repo) = create_server();

    for url in ["javascript:alert(1)", "mailto:a@b.c", "ftp://x.y/z"] {
        let response = server
            .post("/urls")
            .json(&json!({ "original_url": url }))
            .await;

        response.assert_status_bad_request();
    }
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_url_rejects_reserved_code() {
    let (server, repo) = create_server();

    let response = server
        .post("/urls")
        .json(&json!({ "original_url": "https://example.com", "short_code": "urls" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(repo.is_empty());
}
