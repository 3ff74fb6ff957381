use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{shift::Shift, window::TargetWindow};
use crate::errors::{ShiftError, ShiftResult};

/// Body of a schedule generation request. At most one of `days_ahead` and
/// `month` may be given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub days_ahead: Option<u32>,
    pub month: Option<String>,
    pub seed: Option<u64>,
}

impl ScheduleRequest {
    /// Resolves the target window and the forecast horizon in days.
    pub fn resolve(
        &self,
        today: NaiveDate,
        default_days: u32,
        month_buffer_days: u32,
    ) -> ShiftResult<(TargetWindow, u32)> {
        match (self.days_ahead, self.month.as_deref()) {
            (Some(_), Some(_)) => Err(ShiftError::Validation(
                "Specify either days_ahead or month, not both".to_string(),
            )),
            (None, Some(month)) => {
                let window = TargetWindow::month(month)?;
                let until_end = (window.end - today).num_days() + 1;
                let horizon = u32::try_from(until_end.max(1)).unwrap_or(u32::MAX);
                Ok((window, horizon.saturating_add(month_buffer_days)))
            }
            (days, None) => {
                let days = days.unwrap_or(default_days);
                Ok((TargetWindow::days_ahead(today, days)?, days))
            }
        }
    }
}

/// Headcount decision for one date of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub date: NaiveDate,
    pub predicted: f64,
    pub required: usize,
    pub candidates: usize,
    pub assigned: Vec<Uuid>,
}

/// Summary of one scheduling run. Only its shifts are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRun {
    pub window: TargetWindow,
    pub forecast_days: usize,
    pub replaced_shifts: u64,
    pub shifts: Vec<Shift>,
    pub days: Vec<DayAssignment>,
    pub notifications_sent: usize,
    pub notifications_failed: usize,
}

impl ScheduleRun {
    pub fn empty(window: TargetWindow) -> Self {
        Self {
            window,
            forecast_days: 0,
            replaced_shifts: 0,
            shifts: Vec::new(),
            days: Vec::new(),
            notifications_sent: 0,
            notifications_failed: 0,
        }
    }
}
