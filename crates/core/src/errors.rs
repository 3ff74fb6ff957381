use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forecast error: {0}")]
    Forecast(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ShiftResult<T> = Result<T, ShiftError>;
