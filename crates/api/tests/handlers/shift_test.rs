use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

// Span checks run before any database access.

#[tokio::test]
async fn test_create_shift_rejects_end_before_start() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .post("/api/shifts")
        .json(&json!({
            "start_time": "2025-04-14T17:00:00Z",
            "end_time": "2025-04-14T09:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_create_shift_rejects_empty_span() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .post("/api/shifts")
        .json(&json!({
            "start_time": "2025-04-14T09:00:00Z",
            "end_time": "2025-04-14T09:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_shifts_rejects_reversed_range() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .get("/api/shifts")
        .add_query_param("start", "2025-05-02")
        .add_query_param("end", "2025-05-01")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
