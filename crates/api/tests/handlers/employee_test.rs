use axum::http::StatusCode;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

// Validation runs before any database access, so these requests never reach
// the (unreachable) pool.

#[rstest]
#[case(json!({"name": "", "role": "Cook", "email": "ana@pozole.test"}))]
#[case(json!({"name": "Ana", "role": "Cook", "email": "ana-at-pozole"}))]
#[case(json!({"name": "Ana", "role": "Cook", "email": "ana@pozole.test", "hourly_rate": -3.5}))]
#[case(json!({"name": "Ana", "role": "Cook", "email": "ana@pozole.test", "availability": {"monday": "whenever"}}))]
#[tokio::test]
async fn test_create_employee_rejects_invalid_payload(#[case] payload: Value) {
    let server = TestContext::new(Vec::new()).server();

    let response = server.post("/api/employees").json(&payload).await;

    let status = response.status_code();
    assert!(
        status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY,
        "unexpected status {}",
        status
    );
}

#[tokio::test]
async fn test_create_employee_validation_error_body() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .post("/api/employees")
        .json(&json!({"name": "Ana", "role": "  ", "email": "ana@pozole.test"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Employee role is required");
}

#[tokio::test]
async fn test_update_employee_rejects_blank_name() {
    let server = TestContext::new(Vec::new()).server();

    let response = server
        .put("/api/employees/6f1c2d1e-8a4b-4f5e-9c3d-2b1a0f9e8d7c")
        .json(&json!({"name": " "}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
