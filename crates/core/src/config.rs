//! # Scheduling Configuration
//!
//! Staffing thresholds, shift hours and run defaults, read from the
//! environment:
//!
//! - `SCHEDULE_DEMAND_THRESHOLD`: demand at which the high headcount applies (default: 175)
//! - `SCHEDULE_LOW_STAFF`: headcount below the threshold (default: 1)
//! - `SCHEDULE_HIGH_STAFF`: headcount at or above the threshold (default: 2)
//! - `SCHEDULE_SHIFT_START` / `SCHEDULE_SHIFT_END`: shift clock times, `HH:MM` (default: 09:00 / 17:00)
//! - `SCHEDULE_AVAILABILITY_POLICY`: `ignore` or `respect` (default: ignore)
//! - `SCHEDULE_DEFAULT_DAYS`: days ahead when a request names no window (default: 14)
//! - `SCHEDULE_MONTH_BUFFER_DAYS`: extra forecast days for month runs (default: 7)
//! - `SCHEDULE_SEED`: fixed RNG seed for reproducible runs (optional)

use std::{env, fmt::Display, str::FromStr};

use chrono::NaiveTime;
use eyre::{Result, WrapErr, eyre};

use crate::{
    engine::{AssignmentEngine, AvailabilityPolicy},
    errors::ShiftResult,
    models::shift::ShiftHours,
    staffing::StaffingRule,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingConfig {
    pub demand_threshold: f64,
    pub low_staff: usize,
    pub high_staff: usize,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub availability_policy: AvailabilityPolicy,
    pub default_days: u32,
    pub month_buffer_days: u32,
    pub seed: Option<u64>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        let hours = ShiftHours::default();
        Self {
            demand_threshold: 175.0,
            low_staff: 1,
            high_staff: 2,
            shift_start: hours.start(),
            shift_end: hours.end(),
            availability_policy: AvailabilityPolicy::Ignore,
            default_days: 14,
            month_buffer_days: 7,
            seed: None,
        }
    }
}

impl SchedulingConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let shift_start = match env::var("SCHEDULE_SHIFT_START") {
            Ok(value) => parse_clock(&value).wrap_err("Invalid SCHEDULE_SHIFT_START value")?,
            Err(_) => defaults.shift_start,
        };
        let shift_end = match env::var("SCHEDULE_SHIFT_END") {
            Ok(value) => parse_clock(&value).wrap_err("Invalid SCHEDULE_SHIFT_END value")?,
            Err(_) => defaults.shift_end,
        };

        let seed = env::var("SCHEDULE_SEED")
            .ok()
            .map(|value| value.parse::<u64>())
            .transpose()
            .wrap_err("Invalid SCHEDULE_SEED value")?;

        let config = Self {
            demand_threshold: env_or("SCHEDULE_DEMAND_THRESHOLD", defaults.demand_threshold)?,
            low_staff: env_or("SCHEDULE_LOW_STAFF", defaults.low_staff)?,
            high_staff: env_or("SCHEDULE_HIGH_STAFF", defaults.high_staff)?,
            shift_start,
            shift_end,
            availability_policy: env_or("SCHEDULE_AVAILABILITY_POLICY", defaults.availability_policy)?,
            default_days: env_or("SCHEDULE_DEFAULT_DAYS", defaults.default_days)?,
            month_buffer_days: env_or("SCHEDULE_MONTH_BUFFER_DAYS", defaults.month_buffer_days)?,
            seed,
        };

        config.engine().wrap_err("Invalid scheduling configuration")?;
        Ok(config)
    }

    /// Builds the assignment engine described by this configuration.
    pub fn engine(&self) -> ShiftResult<AssignmentEngine> {
        let rule = StaffingRule::new(self.demand_threshold, self.low_staff, self.high_staff)?;
        let hours = ShiftHours::new(self.shift_start, self.shift_end)?;
        Ok(AssignmentEngine::new(rule, hours, self.availability_policy))
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| eyre!("Invalid {} value '{}': {}", key, value, e)),
        Err(_) => Ok(default),
    }
}

fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| eyre!("'{}' is not an HH:MM clock time: {}", value, e))
}
