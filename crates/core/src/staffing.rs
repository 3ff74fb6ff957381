use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};

/// Maps a predicted demand value to a required headcount.
///
/// Demand below `threshold` needs `low` staff, anything else needs `high`.
/// A NaN prediction is never below the threshold and gets `high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingRule {
    threshold: f64,
    low: usize,
    high: usize,
}

impl StaffingRule {
    pub fn new(threshold: f64, low: usize, high: usize) -> ShiftResult<Self> {
        if low > high {
            return Err(ShiftError::Validation(format!(
                "Low-demand headcount {} exceeds high-demand headcount {}",
                low, high
            )));
        }
        Ok(Self { threshold, low, high })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn required_headcount(&self, predicted: f64) -> usize {
        if predicted < self.threshold { self.low } else { self.high }
    }
}

impl Default for StaffingRule {
    fn default() -> Self {
        Self {
            threshold: 175.0,
            low: 1,
            high: 2,
        }
    }
}
