use std::collections::BTreeMap;

use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use shiftcast_core::{errors::ShiftError, models::schedule::ScheduleRun};

use crate::test_utils::{TestContext, employee, forecast_from_tomorrow, today};

fn roster() -> Vec<shiftcast_core::models::employee::Employee> {
    vec![employee("Ana"), employee("Beto"), employee("Cata")]
}

#[tokio::test]
async fn test_generate_creates_shifts_per_forecast_headcount() {
    let mut ctx = TestContext::new(roster());
    ctx.forecast
        .expect_forecast()
        .withf(|days| *days == 3)
        .times(1)
        .returning(|_| Ok(forecast_from_tomorrow(&[100.0, 200.0, 150.0])));
    let gateway = ctx.gateway.clone();
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"days_ahead": 3, "seed": 42}))
        .await;

    response.assert_status_ok();
    let run: ScheduleRun = response.json();
    assert_eq!(run.forecast_days, 3);
    assert_eq!(run.shifts.len(), 4);
    assert!(run.notifications_sent >= 2);
    assert_eq!(run.notifications_failed, 0);

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for shift in gateway.shifts() {
        *per_day.entry(shift.start_time.date_naive()).or_default() += 1;
    }
    assert_eq!(per_day.values().copied().collect::<Vec<_>>(), vec![1, 2, 1]);
}

#[tokio::test]
async fn test_generate_uses_configured_default_days() {
    let mut ctx = TestContext::new(roster());
    ctx.settings.default_days = 5;
    ctx.forecast
        .expect_forecast()
        .withf(|days| *days == 5)
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let server = ctx.server();

    let response = server.post("/api/schedule/generate").json(&json!({})).await;

    response.assert_status_ok();
    let run: ScheduleRun = response.json();
    assert_eq!(run.window.start, today().succ_opt().unwrap());
    assert!(run.shifts.is_empty());
}

#[tokio::test]
async fn test_generate_rejects_both_window_selectors() {
    let mut ctx = TestContext::new(roster());
    ctx.forecast.expect_forecast().times(0);
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"days_ahead": 7, "month": "2025-05"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_rejects_days_ahead_past_calendar_end() {
    let mut ctx = TestContext::new(roster());
    ctx.forecast.expect_forecast().times(0);
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"days_ahead": u32::MAX}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_rejects_malformed_month() {
    let mut ctx = TestContext::new(roster());
    ctx.forecast.expect_forecast().times(0);
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"month": "May"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_forecast_failure_leaves_shifts_untouched() {
    let mut ctx = TestContext::new(roster());
    ctx.forecast
        .expect_forecast()
        .returning(|_| Err(ShiftError::Forecast("timeout".to_string())));
    let gateway = ctx.gateway.clone();
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"days_ahead": 3}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert!(gateway.shifts().is_empty());
}

#[tokio::test]
async fn test_generate_with_empty_roster_succeeds() {
    let mut ctx = TestContext::new(Vec::new());
    ctx.forecast
        .expect_forecast()
        .returning(|_| Ok(forecast_from_tomorrow(&[300.0, 300.0])));
    let server = ctx.server();

    let response = server
        .post("/api/schedule/generate")
        .json(&json!({"days_ahead": 2}))
        .await;

    response.assert_status_ok();
    let run: ScheduleRun = response.json();
    assert!(run.shifts.is_empty());
    assert_eq!(run.replaced_shifts, 0);
}

#[tokio::test]
async fn test_configured_seed_makes_runs_repeatable() {
    let mut assigned = Vec::new();

    for _ in 0..2 {
        let staff = (0..6).map(|i| employee(&format!("Staff{}", i))).collect::<Vec<_>>();
        let ids: Vec<_> = staff.iter().map(|e| e.id).collect();
        let mut ctx = TestContext::new(staff);
        ctx.settings.seed = Some(99);
        ctx.forecast
            .expect_forecast()
            .returning(|_| Ok(forecast_from_tomorrow(&[200.0, 200.0, 200.0])));
        let server = ctx.server();

        let response = server
            .post("/api/schedule/generate")
            .json(&json!({"days_ahead": 3}))
            .await;
        let run: ScheduleRun = response.json();

        // Roster ids differ between iterations, so compare roster positions.
        let positions: Vec<Vec<usize>> = run
            .days
            .iter()
            .map(|day| {
                day.assigned
                    .iter()
                    .filter_map(|id| ids.iter().position(|candidate| candidate == id))
                    .collect()
            })
            .collect();
        assigned.push(positions);
    }

    assert_eq!(assigned[0], assigned[1]);
}
