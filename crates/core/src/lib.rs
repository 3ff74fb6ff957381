//! # ShiftCast Core
//!
//! Domain types and scheduling logic shared by the API, database and client
//! crates: the staffing rule, the assignment engine, the run orchestration
//! and the interfaces it consumes.

pub mod assignment;
pub mod config;
pub mod engine;
pub mod errors;
pub mod mock;
pub mod models;
pub mod ports;
pub mod scheduler;
pub mod staffing;
