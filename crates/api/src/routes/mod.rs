pub mod employee;
pub mod forecast;
pub mod health;
pub mod schedule;
pub mod shift;
