//! Integration tests for the HTTP API
//!
//! These tests drive the full router (routes + middleware + error envelope)
//! through `tower::ServiceExt::oneshot` without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, AppConfig, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// Build a test router with a small body limit so the 413 path stays cheap.
fn app() -> Router {
    let config = AppConfig {
        max_body_size_mb: 1,
        ..AppConfig::default()
    };
    build_router(Arc::new(AppState::new(config)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router call failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build failed")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build failed")
}

/// Build a multipart POST to /api/upload with a single part.
fn multipart_upload(field: &str, filename: Option<&str>) -> Request<Body> {
    let boundary = "test-boundary-7af9";
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let body = format!(
        "--{boundary}\r\nContent-Disposition: {disposition}\r\n\
         Content-Type: text/plain\r\n\r\nsample content\r\n--{boundary}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request build failed")
}

#[tokio::test]
async fn test_process_text_success() {
    let (status, body) = send(post_json("/api/process", &json!({ "text": "hello world" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["original_text"], "hello world");
    assert_eq!(body["processed_text"], "Processed: HELLO WORLD");
    assert_eq!(body["length"], 11);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_process_text_counts_characters() {
    let (status, body) = send(post_json("/api/process", &json!({ "text": "héllo" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 5);
    assert_eq!(body["processed_text"], "Processed: HÉLLO");
}

#[tokio::test]
async fn test_process_text_at_limit() {
    let text = "a".repeat(10_000);
    let (status, body) = send(post_json("/api/process", &json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 10_000);
}

#[tokio::test]
async fn test_process_text_too_long() {
    let text = "a".repeat(10_001);
    let (status, body) = send(post_json("/api/process", &json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().expect("error message").to_lowercase();
    assert!(message.contains("too long"));
}

#[tokio::test]
async fn test_process_text_missing_field() {
    let (status, body) = send(post_json("/api/process", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing text data");
}

#[tokio::test]
async fn test_process_text_non_string() {
    let (status, body) = send(post_json("/api/process", &json!({ "text": 123 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text must be a string");
}

#[tokio::test]
async fn test_process_text_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not valid json"))
        .expect("request build failed");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid JSON data");
}

#[tokio::test]
async fn test_process_text_missing_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process")
        .body(Body::from(r#"{"text": "hello"}"#))
        .expect("request build failed");
    let (status, body) = send(request).await;

    // Missing/invalid content type may answer 400 or 415; this stack says 400
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_process_text_idempotent() {
    let payload = json!({ "text": "same input" });
    let (status_a, body_a) = send(post_json("/api/process", &payload)).await;
    let (status_b, body_b) = send(post_json("/api/process", &payload)).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a["original_text"], body_b["original_text"]);
    assert_eq!(body_a["processed_text"], body_b["processed_text"]);
    assert_eq!(body_a["length"], body_b["length"]);
}

#[tokio::test]
async fn test_process_text_payload_too_large() {
    // 2MB body against the 1MB test limit
    let text = "x".repeat(2 * 1024 * 1024);
    let (status, body) = send(post_json("/api/process", &json!({ "text": text }))).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File too large. Maximum size is 16MB.");
}

#[tokio::test]
async fn test_status_probe() {
    let (status, body) = send(get("/api/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());

    let endpoints = body["endpoints"].as_array().expect("endpoints list");
    assert!(!endpoints.is_empty());
    assert!(endpoints.iter().any(|e| e == "/api/process"));
}

#[tokio::test]
async fn test_analytics_simulated_payload() {
    let (status, body) = send(get("/api/analytics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analytics_data"], "Some analytics data here");
    assert_eq!(body["records_processed"], 1234);
    assert!(body["last_updated"].is_string());
}

#[tokio::test]
async fn test_upload_without_body_is_acknowledged() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .body(Body::empty())
        .expect("request build failed");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No file provided, but endpoint is ready");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_upload_without_file_part_is_acknowledged() {
    let (status, body) = send(multipart_upload("note", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No file provided, but endpoint is ready");
}

#[tokio::test]
async fn test_upload_file_field_without_filename_is_acknowledged() {
    // A `file` part with no filename attribute is a plain text form field,
    // so it takes the informational path rather than the 400
    let (status, body) = send(multipart_upload("file", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No file provided, but endpoint is ready");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_upload_empty_filename_rejected() {
    let (status, body) = send(multipart_upload("file", Some(""))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn test_upload_with_file_echoes_filename() {
    let (status, body) = send(multipart_upload("file", Some("notes.txt"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["filename"], "notes.txt");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() {
    let (status, body) = send(get("/api/nonexistent")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_landing_page_serves_html() {
    let response = app().oneshot(get("/")).await.expect("router call failed");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    assert!(html.contains("<!doctype html>"));
    assert!(html.contains("/api/process"));
}

#[tokio::test]
async fn test_request_id_propagated() {
    let request = Request::builder()
        .uri("/api/status")
        .header("x-request-id", "test-id-42")
        .body(Body::empty())
        .expect("request build failed");
    let response = app().oneshot(request).await.expect("router call failed");

    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some("test-id-42".as_bytes())
    );
}
