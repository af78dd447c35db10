//! Integration tests for the word API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic, routing and the
//! request pipeline without needing a live network connection.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wordbank_api::middleware::REQUEST_ID_HEADER;
use wordbank_api::router::build_router;
use wordbank_api::state::AppState;
use wordbank_store::MemoryStore;

fn make_router() -> Router {
    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
    build_router(state, None)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_word(router: &Router, body: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::post("/api/word")
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> &'a str {
    response.headers().get(name).unwrap().to_str().unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_create_duplicate_fetch_and_list() {
    let router = make_router();

    // Create.
    let response = post_word(&router, r#"{"word":"hello","sections":[]}"#).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response.into_body()).await;
    let id = created["id"].as_str().expect("created word has an id").to_owned();
    assert!(!id.is_empty());
    assert_eq!(created["word"], "hello");

    // Duplicate.
    let response = post_word(&router, r#"{"word":"hello","sections":[]}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&response, "content-type"), "application/json; charset=utf-8");
    assert_eq!(header(&response, "x-content-type-options"), "nosniff");
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "word already exists");
    assert!(json["details"].as_str().unwrap().contains("hello"));

    // Fetch by id: no id in the body.
    let response = get(&router, &format!("/api/word/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({ "word": "hello" }));

    // Unknown id.
    let response = get(&router, &format!("/api/word/{}", uuid_like())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "word not found");

    // List.
    let response = get(&router, "/api/words").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let words = json.as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0]["id"], id.as_str());
    assert_eq!(words[0]["word"], "hello");
}

fn uuid_like() -> &'static str {
    "00000000-0000-4000-8000-000000000000"
}

#[tokio::test]
async fn test_list_empty_store() {
    let router = make_router();

    let response = get(&router, "/api/words").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").starts_with("application/json"));
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_random_on_empty_store() {
    let router = make_router();

    let response = get(&router, "/api/word/random").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "no words available");
    assert_eq!(json["details"], "no records");
}

#[tokio::test]
async fn test_random_returns_only_word_without_id() {
    let router = make_router();

    let sections = r#"[{"definition":"a greeting","examples":["hello there"]}]"#;
    let response = post_word(&router, &format!(r#"{{"word":"hello","sections":{sections}}}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    for _ in 0..5 {
        let response = get(&router, "/api/word/random").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_to_json(response.into_body()).await;
        assert!(json.get("id").is_none());
        assert_eq!(json["word"], "hello");
        assert_eq!(json["sections"][0]["definition"], "a greeting");
        assert_eq!(json["sections"][0]["examples"][0], "hello there");
    }
}

#[tokio::test]
async fn test_non_uuid_id_is_not_found() {
    let router = make_router();

    let response = get(&router, "/api/word/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "word not found");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let router = make_router();

    let response = post_word(&router, r#"{"word":"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&response, "content-type"), "application/json; charset=utf-8");
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "invalid json");

    let response = post_word(&router, r#"{"sections":[]}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "invalid json");

    // Nothing was stored.
    let response = get(&router, "/api/words").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let router = make_router();
    let client_id = uuid_like();

    let response = post_word(&router, &format!(r#"{{"id":"{client_id}","word":"hello"}}"#)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_ne!(json["id"], client_id);

    let response = get(&router, &format!("/api/word/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicates_do_not_grow_list() {
    let router = make_router();

    for word in ["alpha", "beta", "alpha", "gamma", "beta"] {
        post_word(&router, &format!(r#"{{"word":"{word}"}}"#)).await;
    }

    let response = get(&router, "/api/words").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_each_request_gets_fresh_request_id() {
    let router = make_router();

    let first = router
        .clone()
        .oneshot(
            Request::get("/api/words")
                .header(REQUEST_ID_HEADER, "client-chosen")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second = get(&router, "/api/words").await;

    let first_id = header(&first, REQUEST_ID_HEADER).to_owned();
    let second_id = header(&second, REQUEST_ID_HEADER).to_owned();

    assert_ne!(first_id, "client-chosen");
    assert_ne!(first_id, second_id);
    assert!(first_id.parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn test_error_responses_carry_request_id() {
    let router = make_router();

    let response = get(&router, "/api/word/random").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_unknown_route_without_assets_is_not_found() {
    let router = make_router();

    let response = get(&router, "/index.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_assets_are_served_as_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>wordbank</h1>").unwrap();

    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
    let router = build_router(state, Some(dir.path()));

    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").contains("text/html"));

    // API routes still win over the fallback.
    let response = get(&router, "/api/words").await;
    assert_eq!(response.status(), StatusCode::OK);
}
