use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_shifts_employee_id ON shifts(employee_id)",
    "CREATE INDEX IF NOT EXISTS idx_shifts_start_time ON shifts(start_time)",
    "CREATE INDEX IF NOT EXISTS idx_shifts_end_time ON shifts(end_time)",
    "CREATE INDEX IF NOT EXISTS idx_performance_logs_log_date ON performance_logs(log_date)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            role VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            hourly_rate DOUBLE PRECISION NULL,
            availability JSONB NOT NULL DEFAULT '{}'::jsonb,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT non_negative_rate CHECK (hourly_rate IS NULL OR hourly_rate >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shifts table. Deleting an employee keeps their shifts unassigned.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            employee_id UUID NULL REFERENCES employees(id) ON DELETE SET NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            day_label VARCHAR(16) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One log per employee per calendar month, keyed by the month's first day
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS performance_logs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            log_date DATE NOT NULL,
            log_month DATE NOT NULL,
            rating SMALLINT NULL,
            notes TEXT NULL,
            recorded_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT rating_range CHECK (rating IS NULL OR rating BETWEEN 1 AND 5),
            CONSTRAINT one_log_per_month UNIQUE (employee_id, log_month)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Prepared statements run one command at a time
    for index in INDEXES {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
