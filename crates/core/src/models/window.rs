use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};

/// Inclusive date range whose shifts are regenerated by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TargetWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ShiftResult<Self> {
        if start > end {
            return Err(ShiftError::Validation(format!(
                "Window start {} is after window end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days` dates following `today`.
    pub fn days_ahead(today: NaiveDate, days: u32) -> ShiftResult<Self> {
        if days == 0 {
            return Err(ShiftError::Validation("days_ahead must be at least 1".to_string()));
        }
        let out_of_range =
            || ShiftError::Validation(format!("days_ahead {} is out of the calendar range", days));
        let start = today.checked_add_days(Days::new(1)).ok_or_else(out_of_range)?;
        let end = today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(out_of_range)?;
        Self::new(start, end)
    }

    /// A calendar month given as `YYYY-MM`.
    pub fn month(value: &str) -> ShiftResult<Self> {
        let invalid = || ShiftError::Validation(format!("Month '{}' must look like YYYY-MM", value));

        let first = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
            .map_err(|_| invalid())?;
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        }
        .ok_or_else(invalid)?;

        Self::new(first, next_month.pred_opt().ok_or_else(invalid)?)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// First instant of the window (start date at 00:00 UTC).
    pub fn start_instant(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.start.and_time(NaiveTime::MIN))
    }

    /// Exclusive upper bound (the day after `end`, at 00:00 UTC). Fails when
    /// `end` is the last representable date.
    pub fn end_instant(&self) -> ShiftResult<DateTime<Utc>> {
        let next = self.end.succ_opt().ok_or_else(|| {
            ShiftError::Validation(format!("Window end {} is out of the calendar range", self.end))
        })?;
        Ok(Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN)))
    }
}
