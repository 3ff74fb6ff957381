//! Weekly availability of an employee.
//!
//! Availability is stored as a map from day name to either a clock range
//! (`"09:00-17:00"`) or `"off"`. A blank value is read as `off`. A range whose
//! end is at or before its start runs past midnight, so `"16:00-00:00"` covers
//! the evening up to midnight.

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ShiftError;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// English day name used as the shift day label.
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Availability for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayAvailability {
    Off,
    Hours { start: NaiveTime, end: NaiveTime },
}

impl DayAvailability {
    pub fn hours(start: NaiveTime, end: NaiveTime) -> Self {
        DayAvailability::Hours { start, end }
    }

    /// Whether a span starting at `start` and lasting `duration_minutes` fits
    /// entirely inside this day's range.
    pub fn covers(&self, start: NaiveTime, duration_minutes: i64) -> bool {
        match self {
            DayAvailability::Off => false,
            DayAvailability::Hours { start: open, end: close } => {
                let open = minute_of_day(*open);
                let mut close = minute_of_day(*close);
                if close <= open {
                    close += MINUTES_PER_DAY;
                }
                let begin = minute_of_day(start);
                duration_minutes > 0 && begin >= open && begin + duration_minutes <= close
            }
        }
    }
}

fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

impl FromStr for DayAvailability {
    type Err = ShiftError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("off") {
            return Ok(DayAvailability::Off);
        }

        let (start, end) = value.split_once('-').ok_or_else(|| {
            ShiftError::Validation(format!(
                "Availability '{}' must be 'off' or a range like 09:00-17:00",
                value
            ))
        })?;
        let parse = |part: &str| {
            NaiveTime::parse_from_str(part.trim(), "%H:%M").map_err(|_| {
                ShiftError::Validation(format!("Invalid clock time '{}' in availability", part.trim()))
            })
        };

        Ok(DayAvailability::Hours {
            start: parse(start)?,
            end: parse(end)?,
        })
    }
}

impl TryFrom<String> for DayAvailability {
    type Error = ShiftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayAvailability> for String {
    fn from(value: DayAvailability) -> Self {
        match value {
            DayAvailability::Off => "off".to_string(),
            DayAvailability::Hours { start, end } => {
                format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
            }
        }
    }
}

/// Day name to availability. Days without an entry count as unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyAvailability(BTreeMap<DayOfWeek, DayAvailability>);

impl WeeklyAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: DayOfWeek, availability: DayAvailability) -> Self {
        self.set(day, availability);
        self
    }

    pub fn set(&mut self, day: DayOfWeek, availability: DayAvailability) {
        self.0.insert(day, availability);
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayAvailability> {
        self.0.get(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_available(&self, day: DayOfWeek, start: NaiveTime, duration_minutes: i64) -> bool {
        self.day(day)
            .is_some_and(|availability| availability.covers(start, duration_minutes))
    }
}
