use eyre::Result;
use shiftcast_core::models::performance::{PerformanceLog, month_start};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbPerformanceLog;

/// Inserts a log. A second log for the same employee and month fails with a
/// unique violation on `one_log_per_month`.
pub async fn create_performance_log(
    pool: &Pool<Postgres>,
    log: &PerformanceLog,
) -> Result<DbPerformanceLog> {
    tracing::debug!(
        "Creating performance log: id={}, employee_id={}, log_date={}",
        log.id,
        log.employee_id,
        log.log_date
    );

    let created = sqlx::query_as::<_, DbPerformanceLog>(
        r#"
        INSERT INTO performance_logs (id, employee_id, log_date, log_month, rating, notes, recorded_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, employee_id, log_date, rating, notes, recorded_at
        "#,
    )
    .bind(log.id)
    .bind(log.employee_id)
    .bind(log.log_date)
    .bind(month_start(log.log_date))
    .bind(log.rating)
    .bind(&log.notes)
    .bind(log.recorded_at)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Logs of one employee, newest first.
pub async fn list_employee_performance_logs(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
) -> Result<Vec<DbPerformanceLog>> {
    let logs = sqlx::query_as::<_, DbPerformanceLog>(
        r#"
        SELECT id, employee_id, log_date, rating, notes, recorded_at
        FROM performance_logs
        WHERE employee_id = $1
        ORDER BY log_date DESC, recorded_at DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(logs)
}
