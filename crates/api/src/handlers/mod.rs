pub mod employee;
pub mod forecast;
pub mod performance;
pub mod schedule;
pub mod shift;
