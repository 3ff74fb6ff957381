use axum::{body::to_bytes, http::StatusCode};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use shiftcast_api::middleware::error_handling::{AppError, handle_timeout_error, map_error};
use shiftcast_core::errors::ShiftError;

#[rstest]
#[case(ShiftError::NotFound("Employee not found".into()), StatusCode::NOT_FOUND)]
#[case(ShiftError::Validation("Invalid input".into()), StatusCode::BAD_REQUEST)]
#[case(ShiftError::Conflict("Already scheduled".into()), StatusCode::CONFLICT)]
#[case(ShiftError::Forecast("Forecaster down".into()), StatusCode::BAD_GATEWAY)]
#[case(ShiftError::Notification("Webhook down".into()), StatusCode::BAD_GATEWAY)]
#[case(ShiftError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: ShiftError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_carries_message() {
    let response = map_error(ShiftError::Validation("days must be at least 1".to_string()));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Validation error: days must be at least 1"}));
}

#[tokio::test]
async fn test_plain_eyre_report_is_a_database_error() {
    let error = AppError::from(eyre::eyre!("connection refused"));

    assert!(matches!(error.0, ShiftError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_non_timeout_layer_error_is_internal() {
    let error: axum::BoxError = Box::new(std::io::Error::other("broken pipe"));

    let response = handle_timeout_error(error).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
