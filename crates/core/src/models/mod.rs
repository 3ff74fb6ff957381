pub mod availability;
pub mod employee;
pub mod forecast;
pub mod notice;
pub mod performance;
pub mod schedule;
pub mod shift;
pub mod window;
