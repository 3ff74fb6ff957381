use chrono::Utc;
use eyre::Result;
use shiftcast_core::models::employee::{CreateEmployeeRequest, Employee};
use sqlx::{Pool, Postgres, types::Json};
use uuid::Uuid;

use crate::models::DbEmployee;

pub async fn create_employee(
    pool: &Pool<Postgres>,
    request: &CreateEmployeeRequest,
) -> Result<DbEmployee> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating employee: id={}, email={}", id, request.email);

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, name, role, email, hourly_rate, availability, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, role, email, hourly_rate, availability, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(&request.role)
    .bind(&request.email)
    .bind(request.hourly_rate)
    .bind(Json(&request.availability))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(employee)
}

pub async fn get_employee_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEmployee>> {
    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, role, email, hourly_rate, availability, created_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if employee.is_none() {
        tracing::debug!("Employee not found: id={}", id);
    }

    Ok(employee)
}

pub async fn list_employees(pool: &Pool<Postgres>) -> Result<Vec<DbEmployee>> {
    let employees = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, role, email, hourly_rate, availability, created_at
        FROM employees
        ORDER BY name ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

/// Writes every mutable field of `employee` back to its row.
pub async fn update_employee(pool: &Pool<Postgres>, employee: &Employee) -> Result<Option<DbEmployee>> {
    let updated = sqlx::query_as::<_, DbEmployee>(
        r#"
        UPDATE employees
        SET name = $2, role = $3, email = $4, hourly_rate = $5, availability = $6
        WHERE id = $1
        RETURNING id, name, role, email, hourly_rate, availability, created_at
        "#,
    )
    .bind(employee.id)
    .bind(&employee.name)
    .bind(&employee.role)
    .bind(&employee.email)
    .bind(employee.hourly_rate)
    .bind(Json(&employee.availability))
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

/// Returns whether a row was deleted. Shifts of the employee become unassigned.
pub async fn delete_employee(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
