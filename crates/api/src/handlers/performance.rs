use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shiftcast_core::{
    errors::ShiftError,
    models::performance::{CreatePerformanceLogRequest, PerformanceLog, check_monthly_limit},
};
use shiftcast_db::repositories::{employee as employee_repo, performance as repo};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

async fn ensure_employee(state: &ApiState, id: Uuid) -> Result<(), AppError> {
    employee_repo::get_employee_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ShiftError::NotFound(format!("Employee with ID {} not found", id)))?;
    Ok(())
}

async fn employee_logs(state: &ApiState, id: Uuid) -> Result<Vec<PerformanceLog>, AppError> {
    let logs = repo::list_employee_performance_logs(&state.db_pool, id).await?;
    Ok(logs.into_iter().map(PerformanceLog::from).collect())
}

/// Records a performance log. A second log in the same calendar month is a
/// conflict; the table's unique constraint covers concurrent requests.
#[axum::debug_handler]
pub async fn create_performance_log(
    State(state): State<Arc<ApiState>>,
    Path(employee_id): Path<Uuid>,
    Json(payload): Json<CreatePerformanceLogRequest>,
) -> Result<(StatusCode, Json<PerformanceLog>), AppError> {
    let payload = payload.normalized()?;
    ensure_employee(&state, employee_id).await?;

    let existing = employee_logs(&state, employee_id).await?;
    check_monthly_limit(&existing, payload.log_date)?;

    let log = payload.into_log(employee_id);
    let created = repo::create_performance_log(&state.db_pool, &log).await?;
    tracing::info!(
        "Recorded performance log {} for employee {} on {}",
        created.id,
        employee_id,
        created.log_date
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[axum::debug_handler]
pub async fn list_performance_logs(
    State(state): State<Arc<ApiState>>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<Vec<PerformanceLog>>, AppError> {
    ensure_employee(&state, employee_id).await?;

    Ok(Json(employee_logs(&state, employee_id).await?))
}
