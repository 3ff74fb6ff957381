use serde_json::Value;
use shiftcast_core::engine::AvailabilityPolicy;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_reports_policy() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.settings.availability_policy = AvailabilityPolicy::Respect;
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["availability_policy"], "respect");
}

#[tokio::test]
async fn test_health_reports_default_policy() {
    let server = TestContext::new(Vec::new()).server();

    let response = server.get("/health").await;

    let body: Value = response.json();
    assert_eq!(body["availability_policy"], "ignore");
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new(Vec::new()).server();

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "shiftcast-api");
    assert!(body["version"].is_string());
}
