use async_trait::async_trait;
use shiftcast_core::{
    errors::ShiftResult,
    models::{employee::Employee, shift::Shift, window::TargetWindow},
    ports::ShiftGateway,
};

use crate::{
    DbPool,
    repositories::{employee, shift},
};

/// Scheduler storage backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgShiftGateway {
    pool: DbPool,
}

impl PgShiftGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftGateway for PgShiftGateway {
    async fn list_employees(&self) -> ShiftResult<Vec<Employee>> {
        let rows = employee::list_employees(&self.pool).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn replace_shifts(&self, window: &TargetWindow, shifts: &[Shift]) -> ShiftResult<u64> {
        let deleted = shift::replace_shifts_in_window(
            &self.pool,
            window.start_instant(),
            window.end_instant()?,
            shifts,
        )
        .await?;
        Ok(deleted)
    }
}
