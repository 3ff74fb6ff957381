use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::availability::WeeklyAvailability;
use crate::errors::{ShiftError, ShiftResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub availability: WeeklyAvailability,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub role: String,
    pub email: String,
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub availability: WeeklyAvailability,
}

impl CreateEmployeeRequest {
    /// Trims text fields, lower-cases the email and rejects invalid values.
    pub fn normalized(mut self) -> ShiftResult<Self> {
        self.name = required_text("name", &self.name)?;
        self.role = required_text("role", &self.role)?;
        self.email = normalize_email(&self.email)?;
        check_hourly_rate(self.hourly_rate)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub hourly_rate: Option<f64>,
    pub availability: Option<WeeklyAvailability>,
}

impl UpdateEmployeeRequest {
    pub fn normalized(mut self) -> ShiftResult<Self> {
        self.name = self.name.map(|name| required_text("name", &name)).transpose()?;
        self.role = self.role.map(|role| required_text("role", &role)).transpose()?;
        self.email = self.email.map(|email| normalize_email(&email)).transpose()?;
        check_hourly_rate(self.hourly_rate)?;
        Ok(self)
    }

    /// Applies the provided fields on top of an existing employee.
    pub fn apply_to(self, mut employee: Employee) -> Employee {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if self.hourly_rate.is_some() {
            employee.hourly_rate = self.hourly_rate;
        }
        if let Some(availability) = self.availability {
            employee.availability = availability;
        }
        employee
    }
}

fn required_text(field: &str, value: &str) -> ShiftResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ShiftError::Validation(format!("Employee {} is required", field)));
    }
    Ok(value.to_string())
}

fn normalize_email(email: &str) -> ShiftResult<String> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    };

    if !valid {
        return Err(ShiftError::Validation(format!("'{}' is not a valid email address", email)));
    }
    Ok(email)
}

fn check_hourly_rate(rate: Option<f64>) -> ShiftResult<()> {
    match rate {
        Some(rate) if rate.is_nan() || rate < 0.0 => Err(ShiftError::Validation(
            "Hourly rate cannot be negative".to_string(),
        )),
        _ => Ok(()),
    }
}
