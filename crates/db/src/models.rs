use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shiftcast_core::models::{
    availability::WeeklyAvailability,
    employee::Employee,
    performance::PerformanceLog,
    shift::{Shift, ShiftView},
};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEmployee {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
    pub hourly_rate: Option<f64>,
    pub availability: Json<WeeklyAvailability>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShift {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub day_label: String,
    pub created_at: DateTime<Utc>,
}

/// Shift row joined with its employee's name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShiftView {
    pub id: Uuid,
    pub employee_id: Option<Uuid>,
    pub employee_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub day_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPerformanceLog {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub log_date: NaiveDate,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<DbEmployee> for Employee {
    fn from(row: DbEmployee) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            role: row.role,
            email: row.email,
            hourly_rate: row.hourly_rate,
            availability: row.availability.0,
            created_at: row.created_at,
        }
    }
}

impl From<DbShift> for Shift {
    fn from(row: DbShift) -> Self {
        Shift {
            id: row.id,
            employee_id: row.employee_id,
            start_time: row.start_time,
            end_time: row.end_time,
            day_label: row.day_label,
            created_at: row.created_at,
        }
    }
}

impl From<DbShiftView> for ShiftView {
    fn from(row: DbShiftView) -> Self {
        ShiftView {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            start_time: row.start_time,
            end_time: row.end_time,
            day_label: row.day_label,
        }
    }
}

impl From<DbPerformanceLog> for PerformanceLog {
    fn from(row: DbPerformanceLog) -> Self {
        PerformanceLog {
            id: row.id,
            employee_id: row.employee_id,
            log_date: row.log_date,
            rating: row.rating,
            notes: row.notes,
            recorded_at: row.recorded_at,
        }
    }
}
