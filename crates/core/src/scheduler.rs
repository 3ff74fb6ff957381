//! # Scheduler
//!
//! Runs one scheduling pass end to end: forecast, window filter, roster,
//! plan, atomic replace, notifications. Nothing is persisted unless the
//! forecast succeeded, the window has forecast dates and the roster is not
//! empty. Notification failures are counted but never fail the run.

use std::{collections::HashMap, sync::Arc};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    engine::{AssignmentEngine, SchedulePlan},
    errors::{ShiftError, ShiftResult},
    models::{
        employee::Employee, forecast::ForecastPoint, schedule::ScheduleRun, window::TargetWindow,
    },
    ports::{ForecastProvider, Notifier, ShiftGateway},
};

pub struct Scheduler {
    forecast: Arc<dyn ForecastProvider>,
    gateway: Arc<dyn ShiftGateway>,
    notifier: Arc<dyn Notifier>,
    engine: AssignmentEngine,
}

impl Scheduler {
    pub fn new(
        forecast: Arc<dyn ForecastProvider>,
        gateway: Arc<dyn ShiftGateway>,
        notifier: Arc<dyn Notifier>,
        engine: AssignmentEngine,
    ) -> Self {
        Self {
            forecast,
            gateway,
            notifier,
            engine,
        }
    }

    pub fn engine(&self) -> &AssignmentEngine {
        &self.engine
    }

    /// Runs with a seeded RNG when `seed` is given, otherwise with entropy.
    pub async fn run(
        &self,
        window: TargetWindow,
        horizon_days: u32,
        seed: Option<u64>,
    ) -> ShiftResult<ScheduleRun> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(window, horizon_days, &mut rng).await
    }

    pub async fn run_with_rng<R: Rng + Send>(
        &self,
        window: TargetWindow,
        horizon_days: u32,
        rng: &mut R,
    ) -> ShiftResult<ScheduleRun> {
        info!(
            "Starting schedule generation for {} to {} (forecast horizon {} days)",
            window.start, window.end, horizon_days
        );

        let forecast = match self.forecast.forecast(horizon_days).await {
            Ok(points) => points,
            Err(e) => {
                error!("Forecast generation failed, schedule left unchanged: {}", e);
                return Err(match e {
                    ShiftError::Forecast(_) => e,
                    other => ShiftError::Forecast(other.to_string()),
                });
            }
        };

        let points: Vec<ForecastPoint> = forecast
            .into_iter()
            .filter(|point| window.contains(point.date))
            .collect();
        if points.is_empty() {
            warn!(
                "No forecast data inside {} to {}, no shifts generated",
                window.start, window.end
            );
            return Ok(ScheduleRun::empty(window));
        }

        let roster = self.gateway.list_employees().await?;
        if roster.is_empty() {
            warn!("No employees found, no shifts generated");
            return Ok(ScheduleRun::empty(window));
        }
        info!(
            "Scheduling {} forecast days across {} employees",
            points.len(),
            roster.len()
        );

        let SchedulePlan {
            shifts,
            days,
            assignments,
        } = self.engine.plan(&points, &roster, rng);

        let replaced_shifts = match self.gateway.replace_shifts(&window, &shifts).await {
            Ok(deleted) => deleted,
            Err(e) => {
                error!("Persisting schedule failed, changes rolled back: {}", e);
                return Err(e);
            }
        };
        info!(
            "Replaced {} existing shifts with {} new shifts",
            replaced_shifts,
            shifts.len()
        );

        let by_id: HashMap<Uuid, &Employee> =
            roster.iter().map(|employee| (employee.id, employee)).collect();
        let mut notifications_sent = 0;
        let mut notifications_failed = 0;

        for (employee_id, mut assigned) in assignments {
            assigned.sort_by_key(|shift| shift.start_time);

            let Some(employee) = by_id.get(&employee_id) else {
                warn!("Employee {} missing from roster during notification", employee_id);
                notifications_failed += 1;
                continue;
            };

            match self.notifier.notify(employee, &assigned).await {
                Ok(()) => notifications_sent += 1,
                Err(e) => {
                    warn!("Failed to notify {} ({}): {}", employee.name, employee.email, e);
                    notifications_failed += 1;
                }
            }
        }

        info!(
            "Schedule generation finished: {} shifts, {} notifications sent, {} failed",
            shifts.len(),
            notifications_sent,
            notifications_failed
        );

        Ok(ScheduleRun {
            window,
            forecast_days: days.len(),
            replaced_shifts,
            shifts,
            days,
            notifications_sent,
            notifications_failed,
        })
    }
}
