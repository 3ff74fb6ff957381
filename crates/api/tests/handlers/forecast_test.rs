use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shiftcast_core::{errors::ShiftError, models::forecast::ForecastPoint};

use crate::test_utils::{TestContext, forecast_from_tomorrow};

#[tokio::test]
async fn test_preview_defaults_to_a_week() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.forecast
        .expect_forecast()
        .withf(|days| *days == 7)
        .times(1)
        .returning(|days| Ok(forecast_from_tomorrow(&vec![120.0; days as usize])));
    let server = ctx.server();

    let response = server.get("/api/forecast").await;

    response.assert_status_ok();
    let points: Vec<ForecastPoint> = response.json();
    assert_eq!(points.len(), 7);
}

#[tokio::test]
async fn test_preview_uses_requested_days() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.forecast
        .expect_forecast()
        .withf(|days| *days == 3)
        .times(1)
        .returning(|_| Ok(forecast_from_tomorrow(&[100.0, 200.0, 150.0])));
    let server = ctx.server();

    let response = server.get("/api/forecast").add_query_param("days", 3).await;

    response.assert_status_ok();
    let points: Vec<ForecastPoint> = response.json();
    assert_eq!(
        points.iter().map(|p| p.predicted).collect::<Vec<_>>(),
        vec![100.0, 200.0, 150.0]
    );
}

#[tokio::test]
async fn test_preview_rejects_zero_days() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.forecast.expect_forecast().times(0);
    let server = ctx.server();

    let response = server.get("/api/forecast").add_query_param("days", 0).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preview_reports_forecaster_failure_as_bad_gateway() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.forecast
        .expect_forecast()
        .returning(|_| Err(ShiftError::Forecast("connection refused".to_string())));
    let server = ctx.server();

    let response = server.get("/api/forecast").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}
