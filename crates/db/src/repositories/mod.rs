pub mod employee;
pub mod performance;
pub mod shift;

// Postgres SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Whether a repository error came from a unique constraint, such as a
/// duplicate employee email or a second performance log in one month.
pub fn is_unique_violation(report: &eyre::Report) -> bool {
    report
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|e| e.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}
