use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::availability::DayOfWeek;
use crate::errors::{ShiftError, ShiftResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub day_label: String,
    pub created_at: DateTime<Utc>,
}

impl Shift {
    /// Builds a shift, rejecting any span where start is not before end.
    pub fn new(
        id: Uuid,
        employee_id: Option<Uuid>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> ShiftResult<Self> {
        check_span(start_time, end_time)?;
        Ok(Self {
            id,
            employee_id,
            start_time,
            end_time,
            day_label: day_of(start_time).label().to_string(),
            created_at: Utc::now(),
        })
    }

    /// Shift on `date` using the given clock hours. `ShiftHours` always spans
    /// a positive duration, so the start/end invariant holds.
    pub fn from_hours(id: Uuid, employee_id: Option<Uuid>, date: NaiveDate, hours: &ShiftHours) -> Self {
        let (start_time, end_time) = hours.span_on(date);
        Self {
            id,
            employee_id,
            start_time,
            end_time,
            day_label: DayOfWeek::from(date.weekday()).label().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn day(&self) -> DayOfWeek {
        day_of(self.start_time)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Half-open overlap test against `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && start < self.end_time
    }
}

fn day_of(instant: DateTime<Utc>) -> DayOfWeek {
    instant.weekday().into()
}

pub fn check_span(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> ShiftResult<()> {
    if start_time >= end_time {
        return Err(ShiftError::Validation(format!(
            "Shift start {} must be before end {}",
            start_time, end_time
        )));
    }
    Ok(())
}

/// Clock times of a generated shift. An end at or before the start rolls to
/// the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl ShiftHours {
    pub fn new(start: NaiveTime, end: NaiveTime) -> ShiftResult<Self> {
        if start == end {
            return Err(ShiftError::Validation(format!(
                "Shift hours must not start and end at {}",
                start.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if minutes > 0 { minutes } else { minutes + 24 * 60 }
    }

    /// UTC instants of the shift that starts on `date`.
    pub fn span_on(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = Utc.from_utc_datetime(&date.and_time(self.start));
        (start, start + Duration::minutes(self.duration_minutes()))
    }
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    pub employee_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Only used when `employee_id` is set. Same meaning as on assign.
    pub check_availability: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignShiftRequest {
    pub employee_id: Uuid,
    /// Overrides the configured availability policy for this call.
    pub check_availability: Option<bool>,
}

/// A shift joined with the name of its employee, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftView {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub employee_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub day_label: String,
}
