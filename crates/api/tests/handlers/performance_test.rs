use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

// Payload checks run before the employee lookup, so the unreachable pool is
// never touched.

const LOGS_PATH: &str = "/api/employees/6f1c2d1e-8a4b-4f5e-9c3d-2b1a0f9e8d7c/performance";

#[rstest]
#[case(0)]
#[case(6)]
#[tokio::test]
async fn test_create_log_rejects_rating_out_of_range(#[case] rating: i16) {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .post(LOGS_PATH)
        .json(&json!({"log_date": "2025-04-30", "rating": rating}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Rating must be between 1 and 5"));
}

#[tokio::test]
async fn test_create_log_rejects_malformed_date() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .post(LOGS_PATH)
        .json(&json!({"log_date": "April 30", "rating": 4}))
        .await;

    let status = response.status_code();
    assert!(
        status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY,
        "unexpected status {}",
        status
    );
}

#[tokio::test]
async fn test_list_logs_rejects_invalid_employee_id() {
    let server = TestContext::new(Vec::new()).server();

    let response = server.get("/api/employees/not-a-uuid/performance").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
