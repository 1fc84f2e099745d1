//! Integration tests for the HTTP API
//!
//! These tests exercise the routes that do not need a live object store or
//! provider: the storage client is pointed at an unreachable endpoint (its
//! startup bucket check only warns) and the assist/tts providers fail their
//! availability checks, which is exactly what the 503 paths are for.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use yomu_server::config::Config;
use yomu_server::routes;
use yomu_server::state::AppState;
use yomu_server::storage::S3Client;

const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

async fn test_server() -> TestServer {
    let mut config = Config::default();
    config.storage.endpoint = DEAD_ENDPOINT.to_string();
    config.assist.endpoint = DEAD_ENDPOINT.to_string();
    config.tts.endpoint = DEAD_ENDPOINT.to_string();

    let s3_client = S3Client::new(&config.storage)
        .await
        .expect("failed to build storage client");
    let state = AppState::new(config, s3_client);

    TestServer::new(routes::router(state)).expect("failed to build test server")
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "yomu-server");
}

#[tokio::test]
async fn test_versioned_health_alias() {
    let server = test_server().await;

    let response = server.get("/api/v1/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_strip_removes_bracket_and_ruby_markup() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/furigana/strip")
        .json(&json!({ "text": "<ruby>漢字<rt>かんじ</rt></ruby>を読む。薔薇[ばら]も。" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["text"], "漢字を読む。薔薇も。");
}

#[tokio::test]
async fn test_annotate_wraps_uncommon_kanji() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/furigana/annotate")
        .json(&json!({ "text": "薔薇[ばら]の花" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["text"], "<ruby>薔薇<rt>ばら</rt></ruby>の花");
}

#[tokio::test]
async fn test_explain_without_provider_returns_503() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/assist/explain")
        .json(&json!({ "sentence": "今日は晴れです。" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["error"], "assist_error");
}

#[tokio::test]
async fn test_paraphrase_rejects_empty_sentence() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/assist/paraphrase")
        .json(&json!({ "sentence": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_tts_without_engine_returns_503() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/tts")
        .json(&json!({ "text": "こんにちは" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json();
    assert_eq!(body["error"], "speech_error");
}

#[tokio::test]
async fn test_tts_rejects_empty_text() {
    let server = test_server().await;

    let response = server.post("/api/v1/tts").json(&json!({ "text": "" })).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vocabulary_create_requires_word() {
    let server = test_server().await;

    let response = server
        .post("/api/v1/vocabulary")
        .json(&json!({ "word": "   " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "word must not be empty");
}

#[tokio::test]
async fn test_page_zero_is_rejected_before_storage() {
    let server = test_server().await;

    let response = server.get("/api/v1/texts/novels/story.txt/page/0").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}
