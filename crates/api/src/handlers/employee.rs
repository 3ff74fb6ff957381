use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shiftcast_core::{
    errors::ShiftError,
    models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
};
use shiftcast_db::repositories::employee as repo;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

fn not_found(id: Uuid) -> ShiftError {
    ShiftError::NotFound(format!("Employee with ID {} not found", id))
}

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let payload = payload.normalized()?;

    let employee = repo::create_employee(&state.db_pool, &payload).await?;
    tracing::info!("Created employee {} ({})", employee.id, employee.email);

    Ok((StatusCode::CREATED, Json(employee.into())))
}

#[axum::debug_handler]
pub async fn list_employees(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = repo::list_employees(&state.db_pool).await?;

    Ok(Json(employees.into_iter().map(Employee::from).collect()))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    let employee = repo::get_employee_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(employee.into()))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let payload = payload.normalized()?;

    let existing: Employee = repo::get_employee_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| not_found(id))?
        .into();
    let employee = payload.apply_to(existing);

    let updated = repo::update_employee(&state.db_pool, &employee)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(updated.into()))
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repo::delete_employee(&state.db_pool, id).await? {
        return Err(not_found(id).into());
    }

    tracing::info!("Deleted employee {}", id);
    Ok(StatusCode::NO_CONTENT)
}
