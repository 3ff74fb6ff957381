//! Test doubles for the scheduler's collaborators.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mockall::mock;

use crate::{
    errors::ShiftResult,
    models::{
        employee::Employee, forecast::ForecastPoint, shift::Shift, window::TargetWindow,
    },
    ports::{ForecastProvider, Notifier, ShiftGateway},
};

mock! {
    pub ForecastProvider {}

    #[async_trait]
    impl ForecastProvider for ForecastProvider {
        async fn forecast(&self, days_ahead: u32) -> ShiftResult<Vec<ForecastPoint>>;
    }
}

mock! {
    pub ShiftGateway {}

    #[async_trait]
    impl ShiftGateway for ShiftGateway {
        async fn list_employees(&self) -> ShiftResult<Vec<Employee>>;

        async fn replace_shifts(&self, window: &TargetWindow, shifts: &[Shift]) -> ShiftResult<u64>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl Notifier for Notifier {
        async fn notify(&self, employee: &Employee, shifts: &[Shift]) -> ShiftResult<()>;
    }
}

/// Gateway backed by plain vectors, with the same replace semantics as the
/// database gateway.
#[derive(Debug, Default)]
pub struct InMemoryShiftGateway {
    employees: Mutex<Vec<Employee>>,
    shifts: Mutex<Vec<Shift>>,
}

impl InMemoryShiftGateway {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            shifts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_shifts(self, shifts: Vec<Shift>) -> Self {
        *lock(&self.shifts) = shifts;
        self
    }

    pub fn shifts(&self) -> Vec<Shift> {
        lock(&self.shifts).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ShiftGateway for InMemoryShiftGateway {
    async fn list_employees(&self) -> ShiftResult<Vec<Employee>> {
        Ok(lock(&self.employees).clone())
    }

    async fn replace_shifts(&self, window: &TargetWindow, shifts: &[Shift]) -> ShiftResult<u64> {
        let (from, until) = (window.start_instant(), window.end_instant()?);
        let mut stored = lock(&self.shifts);

        let before = stored.len();
        stored.retain(|shift| shift.start_time < from || shift.start_time >= until);
        let deleted = (before - stored.len()) as u64;

        stored.extend_from_slice(shifts);
        Ok(deleted)
    }
}
