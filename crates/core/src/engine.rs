//! # Assignment Engine
//!
//! Turns a demand forecast into daily staffing assignments.
//!
//! For each forecast date in ascending order the engine:
//!
//! 1. asks the [`StaffingRule`] how many employees the date needs,
//! 2. caps that number at the size of the candidate pool,
//! 3. shuffles the pool with the injected RNG and takes a prefix,
//! 4. builds one shift per selected employee using the configured hours.
//!
//! Selection is a fairness heuristic, not a constraint solver. Whether weekly
//! availability narrows the pool is decided by [`AvailabilityPolicy`].

use std::{collections::BTreeMap, str::FromStr};

use chrono::{Datelike, NaiveDate};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::ShiftError,
    models::{
        employee::Employee,
        forecast::ForecastPoint,
        schedule::DayAssignment,
        shift::{Shift, ShiftHours},
    },
    staffing::StaffingRule,
};

/// Whether weekly availability limits who can be picked for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityPolicy {
    /// Every roster member is a candidate every day.
    #[default]
    Ignore,
    /// Only employees whose availability covers the whole shift are candidates.
    Respect,
}

impl FromStr for AvailabilityPolicy {
    type Err = ShiftError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(AvailabilityPolicy::Ignore),
            "respect" => Ok(AvailabilityPolicy::Respect),
            other => Err(ShiftError::Validation(format!(
                "Unknown availability policy '{}', expected 'ignore' or 'respect'",
                other
            ))),
        }
    }
}

impl AvailabilityPolicy {
    /// Whether a manual assignment checks weekly availability. An explicit
    /// per-request choice wins over the policy.
    pub fn check_for(self, requested: Option<bool>) -> bool {
        requested.unwrap_or(self == AvailabilityPolicy::Respect)
    }
}

/// Output of one planning pass.
#[derive(Debug, Clone, Default)]
pub struct SchedulePlan {
    /// Replacement shift rows for the window, in date order.
    pub shifts: Vec<Shift>,
    pub days: Vec<DayAssignment>,
    /// New shifts per employee, used for notifications.
    pub assignments: BTreeMap<Uuid, Vec<Shift>>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    rule: StaffingRule,
    hours: ShiftHours,
    policy: AvailabilityPolicy,
}

impl AssignmentEngine {
    pub fn new(rule: StaffingRule, hours: ShiftHours, policy: AvailabilityPolicy) -> Self {
        Self { rule, hours, policy }
    }

    pub fn rule(&self) -> &StaffingRule {
        &self.rule
    }

    pub fn hours(&self) -> &ShiftHours {
        &self.hours
    }

    pub fn policy(&self) -> AvailabilityPolicy {
        self.policy
    }

    pub fn is_candidate(&self, employee: &Employee, date: NaiveDate) -> bool {
        match self.policy {
            AvailabilityPolicy::Ignore => true,
            AvailabilityPolicy::Respect => employee.availability.is_available(
                date.weekday().into(),
                self.hours.start(),
                self.hours.duration_minutes(),
            ),
        }
    }

    /// Plans shifts for every date in `forecast`. When a date appears more
    /// than once, its first point wins.
    pub fn plan<R: Rng>(&self, forecast: &[ForecastPoint], roster: &[Employee], rng: &mut R) -> SchedulePlan {
        let mut points: Vec<&ForecastPoint> = forecast.iter().collect();
        points.sort_by_key(|point| point.date);
        points.dedup_by_key(|point| point.date);

        let mut plan = SchedulePlan::default();

        for point in points {
            let required = self.rule.required_headcount(point.predicted);

            let mut pool: Vec<&Employee> = roster
                .iter()
                .filter(|employee| self.is_candidate(employee, point.date))
                .collect();
            let candidates = pool.len();
            let count = required.min(candidates);

            pool.shuffle(rng);

            let mut assigned = Vec::with_capacity(count);
            for employee in pool.into_iter().take(count) {
                let id = uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid();
                let shift = Shift::from_hours(id, Some(employee.id), point.date, &self.hours);

                plan.assignments
                    .entry(employee.id)
                    .or_default()
                    .push(shift.clone());
                plan.shifts.push(shift);
                assigned.push(employee.id);
            }

            tracing::debug!(
                date = %point.date,
                predicted = point.predicted,
                required,
                candidates,
                assigned = assigned.len(),
                "Planned staffing for date"
            );

            plan.days.push(DayAssignment {
                date: point.date,
                predicted: point.predicted,
                required,
                candidates,
                assigned,
            });
        }

        plan
    }
}
