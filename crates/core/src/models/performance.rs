use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ShiftError, ShiftResult};

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// A manager's note on an employee. At most one log exists per employee per
/// calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceLog {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub log_date: NaiveDate,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl PerformanceLog {
    /// Whether this log falls in the same calendar month as `date`.
    pub fn same_month(&self, date: NaiveDate) -> bool {
        month_start(self.log_date) == month_start(date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePerformanceLogRequest {
    pub log_date: NaiveDate,
    pub rating: Option<i16>,
    pub notes: Option<String>,
}

impl CreatePerformanceLogRequest {
    /// Checks the rating range and trims notes. Blank notes become `None`.
    pub fn normalized(mut self) -> ShiftResult<Self> {
        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(ShiftError::Validation(format!(
                    "Rating must be between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, rating
                )));
            }
        }
        self.notes = self
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());
        Ok(self)
    }

    pub fn into_log(self, employee_id: Uuid) -> PerformanceLog {
        PerformanceLog {
            id: Uuid::new_v4(),
            employee_id,
            log_date: self.log_date,
            rating: self.rating,
            notes: self.notes,
            recorded_at: Utc::now(),
        }
    }
}

/// First day of the month containing `date`. Stored next to each log so the
/// database can enforce the monthly limit.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Rejects a new log when `existing` already holds one for the same month.
pub fn check_monthly_limit(existing: &[PerformanceLog], log_date: NaiveDate) -> ShiftResult<()> {
    match existing.iter().find(|log| log.same_month(log_date)) {
        Some(log) => Err(ShiftError::Conflict(format!(
            "A performance log already exists for {} (logged on {})",
            log_date.format("%B %Y"),
            log.log_date
        ))),
        None => Ok(()),
    }
}
