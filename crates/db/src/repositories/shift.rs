use chrono::{DateTime, Utc};
use eyre::Result;
use shiftcast_core::models::shift::Shift;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbShift, DbShiftView};

pub async fn create_shift(pool: &Pool<Postgres>, shift: &Shift) -> Result<DbShift> {
    let created = sqlx::query_as::<_, DbShift>(
        r#"
        INSERT INTO shifts (id, employee_id, start_time, end_time, day_label, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, employee_id, start_time, end_time, day_label, created_at
        "#,
    )
    .bind(shift.id)
    .bind(shift.employee_id)
    .bind(shift.start_time)
    .bind(shift.end_time)
    .bind(&shift.day_label)
    .bind(shift.created_at)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn get_shift_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbShift>> {
    let shift = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, employee_id, start_time, end_time, day_label, created_at
        FROM shifts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(shift)
}

/// Shifts starting at or after `from` and, when given, before `until`.
/// Ordered by start time then employee name.
pub async fn list_shifts_in_range(
    pool: &Pool<Postgres>,
    from: DateTime<Utc>,
    until: Option<DateTime<Utc>>,
) -> Result<Vec<DbShiftView>> {
    let shifts = sqlx::query_as::<_, DbShiftView>(
        r#"
        SELECT s.id, s.employee_id, e.name AS employee_name, s.start_time, s.end_time, s.day_label
        FROM shifts s
        LEFT JOIN employees e ON e.id = s.employee_id
        WHERE s.start_time >= $1 AND ($2::timestamptz IS NULL OR s.start_time < $2)
        ORDER BY s.start_time ASC, e.name ASC NULLS LAST
        "#,
    )
    .bind(from)
    .bind(until)
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

pub async fn delete_shift(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM shifts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn assign_shift(
    pool: &Pool<Postgres>,
    shift_id: Uuid,
    employee_id: Uuid,
) -> Result<Option<DbShift>> {
    let shift = sqlx::query_as::<_, DbShift>(
        r#"
        UPDATE shifts
        SET employee_id = $2
        WHERE id = $1
        RETURNING id, employee_id, start_time, end_time, day_label, created_at
        "#,
    )
    .bind(shift_id)
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;

    Ok(shift)
}

/// Shifts of `employee_id` that intersect `[start, end)`.
pub async fn list_employee_shifts_overlapping(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<DbShift>> {
    let shifts = sqlx::query_as::<_, DbShift>(
        r#"
        SELECT id, employee_id, start_time, end_time, day_label, created_at
        FROM shifts
        WHERE employee_id = $1 AND start_time < $3 AND end_time > $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(employee_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

/// Deletes every shift starting in `[from, until)` and inserts `shifts` in
/// one transaction. Returns the number of deleted rows. Nothing is written
/// unless every statement succeeds.
pub async fn replace_shifts_in_window(
    pool: &Pool<Postgres>,
    from: DateTime<Utc>,
    until: DateTime<Utc>,
    shifts: &[Shift],
) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM shifts
        WHERE start_time >= $1 AND start_time < $2
        "#,
    )
    .bind(from)
    .bind(until)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    for shift in shifts {
        sqlx::query(
            r#"
            INSERT INTO shifts (id, employee_id, start_time, end_time, day_label, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(shift.id)
        .bind(shift.employee_id)
        .bind(shift.start_time)
        .bind(shift.end_time)
        .bind(&shift.day_label)
        .bind(shift.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Replaced shifts in window {} to {}: deleted={}, inserted={}",
        from,
        until,
        deleted,
        shifts.len()
    );
    Ok(deleted)
}
