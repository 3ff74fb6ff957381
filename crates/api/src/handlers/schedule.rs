use axum::{Json, extract::State};
use chrono::Utc;
use shiftcast_core::models::schedule::{ScheduleRequest, ScheduleRun};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Regenerates the shifts of the requested window from a fresh forecast.
///
/// The window is either `days_ahead` days after today or a calendar `month`;
/// with neither, the configured default number of days is used. A request
/// seed takes precedence over the configured one.
#[axum::debug_handler]
pub async fn generate_schedule(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ScheduleRequest>,
) -> Result<Json<ScheduleRun>, AppError> {
    let today = Utc::now().date_naive();
    let (window, horizon) = payload.resolve(
        today,
        state.settings.default_days,
        state.settings.month_buffer_days,
    )?;
    let seed = payload.seed.or(state.settings.seed);

    let run = state.scheduler.run(window, horizon, seed).await?;
    Ok(Json(run))
}
