use serde::{Deserialize, Serialize};

use super::{employee::Employee, shift::Shift};

/// Message telling an employee about their newly assigned shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleNotice {
    pub recipient: String,
    pub name: String,
    pub subject: String,
    pub lines: Vec<String>,
}

impl ScheduleNotice {
    /// Expects `shifts` sorted by start time.
    pub fn new(employee: &Employee, shifts: &[Shift]) -> Self {
        let subject = match (shifts.first(), shifts.last()) {
            (Some(first), Some(last)) => format!(
                "Your schedule: {} to {}",
                first.start_time.format("%Y-%m-%d"),
                last.start_time.format("%Y-%m-%d")
            ),
            _ => "Your schedule".to_string(),
        };

        let lines = shifts
            .iter()
            .map(|shift| {
                format!(
                    "{} {} {}-{}",
                    shift.day_label,
                    shift.start_time.format("%Y-%m-%d"),
                    shift.start_time.format("%H:%M"),
                    shift.end_time.format("%H:%M")
                )
            })
            .collect();

        Self {
            recipient: employee.email.clone(),
            name: employee.name.clone(),
            subject,
            lines,
        }
    }

    pub fn body(&self) -> String {
        let mut body = format!("Hello {},\n\nYou have been scheduled for:\n", self.name);
        for line in &self.lines {
            body.push_str("  ");
            body.push_str(line);
            body.push('\n');
        }
        body
    }
}
