//! Interfaces the scheduler consumes from its collaborators.

use async_trait::async_trait;

use crate::{
    errors::ShiftResult,
    models::{
        employee::Employee, forecast::ForecastPoint, shift::Shift, window::TargetWindow,
    },
};

/// Source of predicted demand values.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Predicted demand for the next `days_ahead` days, ordered by date.
    async fn forecast(&self, days_ahead: u32) -> ShiftResult<Vec<ForecastPoint>>;
}

/// Storage the scheduler reads the roster from and writes shifts to.
#[async_trait]
pub trait ShiftGateway: Send + Sync {
    async fn list_employees(&self) -> ShiftResult<Vec<Employee>>;

    /// Deletes every shift starting inside `window` and inserts `shifts`, all
    /// or nothing. Returns the number of deleted rows.
    async fn replace_shifts(&self, window: &TargetWindow, shifts: &[Shift]) -> ShiftResult<u64>;
}

/// Delivers schedule notices to employees.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, employee: &Employee, shifts: &[Shift]) -> ShiftResult<()>;
}
