use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shiftcast_core::{errors::ShiftError, models::forecast::ForecastPoint};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

const DEFAULT_PREVIEW_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub days: Option<u32>,
}

/// Previews the forecast without touching any shifts.
#[axum::debug_handler]
pub async fn preview_forecast(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<ForecastPoint>>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_PREVIEW_DAYS);
    if days == 0 {
        return Err(ShiftError::Validation("days must be at least 1".to_string()).into());
    }

    let points = state.forecast.forecast(days).await?;
    Ok(Json(points))
}
