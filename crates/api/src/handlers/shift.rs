use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use shiftcast_core::{
    assignment::check_assignment,
    errors::ShiftError,
    models::{
        employee::Employee,
        shift::{AssignShiftRequest, CreateShiftRequest, Shift, ShiftView},
        window::TargetWindow,
    },
};
use shiftcast_db::repositories::{employee as employee_repo, shift as repo};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct ShiftRangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

fn not_found(id: Uuid) -> ShiftError {
    ShiftError::NotFound(format!("Shift with ID {} not found", id))
}

/// Shifts starting on or after `start` (default today) and, when `end` is
/// given, on or before `end`.
#[axum::debug_handler]
pub async fn list_shifts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ShiftRangeQuery>,
) -> Result<Json<Vec<ShiftView>>, AppError> {
    let start = query.start.unwrap_or_else(|| Utc::now().date_naive());
    let (from, until) = match query.end {
        Some(end) => {
            let window = TargetWindow::new(start, end)?;
            (window.start_instant(), Some(window.end_instant()?))
        }
        None => (TargetWindow::new(start, start)?.start_instant(), None),
    };

    let shifts = repo::list_shifts_in_range(&state.db_pool, from, until).await?;

    Ok(Json(shifts.into_iter().map(ShiftView::from).collect()))
}

/// Creates a shift. When an employee is given, the same checks as assign
/// apply before the row is written.
#[axum::debug_handler]
pub async fn create_shift(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateShiftRequest>,
) -> Result<(StatusCode, Json<Shift>), AppError> {
    let shift = Shift::new(
        Uuid::new_v4(),
        payload.employee_id,
        payload.start_time,
        payload.end_time,
    )?;

    if let Some(employee_id) = shift.employee_id {
        let employee = load_employee(&state, employee_id).await?;
        let check_availability = state
            .settings
            .availability_policy
            .check_for(payload.check_availability);
        ensure_assignable(&state, &employee, &shift, check_availability).await?;
    }

    let created = repo::create_shift(&state.db_pool, &shift).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[axum::debug_handler]
pub async fn get_shift(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Shift>, AppError> {
    let shift = repo::get_shift_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(shift.into()))
}

#[axum::debug_handler]
pub async fn delete_shift(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repo::delete_shift(&state.db_pool, id).await? {
        return Err(not_found(id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Assigns an employee to an existing shift. Overlapping shifts of the same
/// employee are always rejected. Availability is checked when the request
/// asks for it, or by default under the `respect` policy.
#[axum::debug_handler]
pub async fn assign_shift(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignShiftRequest>,
) -> Result<Json<Shift>, AppError> {
    let shift: Shift = repo::get_shift_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?
        .into();
    let employee = load_employee(&state, payload.employee_id).await?;

    let check_availability = state
        .settings
        .availability_policy
        .check_for(payload.check_availability);
    ensure_assignable(&state, &employee, &shift, check_availability).await?;

    let assigned = repo::assign_shift(&state.db_pool, id, employee.id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!("Assigned shift {} to employee {}", id, employee.id);

    Ok(Json(assigned.into()))
}

async fn load_employee(state: &ApiState, id: Uuid) -> Result<Employee, AppError> {
    let employee = employee_repo::get_employee_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ShiftError::NotFound(format!("Employee with ID {} not found", id)))?;
    Ok(employee.into())
}

async fn ensure_assignable(
    state: &ApiState,
    employee: &Employee,
    shift: &Shift,
    check_availability: bool,
) -> Result<(), AppError> {
    let existing: Vec<Shift> = repo::list_employee_shifts_overlapping(
        &state.db_pool,
        employee.id,
        shift.start_time,
        shift.end_time,
    )
    .await?
    .into_iter()
    .map(Shift::from)
    .collect();

    check_assignment(employee, shift, &existing, check_availability)?;
    Ok(())
}
