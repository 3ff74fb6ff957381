//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies of the form
//! `{"error": "<message>"}`, so every endpoint fails the same way.

use axum::{
    BoxError, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shiftcast_core::errors::ShiftError;
use shiftcast_db::repositories::is_unique_violation;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use shiftcast_api::middleware::error_handling::AppError;
/// use shiftcast_core::errors::ShiftError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.is_empty() {
///         return Err(AppError(ShiftError::Validation("name is required".to_string())));
///     }
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ShiftError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ShiftError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftError::Validation(_) => StatusCode::BAD_REQUEST,
            ShiftError::Conflict(_) => StatusCode::CONFLICT,
            ShiftError::Forecast(_) => StatusCode::BAD_GATEWAY,
            ShiftError::Notification(_) => StatusCode::BAD_GATEWAY,
            ShiftError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShiftError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<ShiftError> for AppError {
    fn from(err: ShiftError) -> Self {
        AppError(err)
    }
}

/// Repository errors become database errors, except unique-constraint
/// violations which are conflicts.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        if is_unique_violation(&err) {
            return AppError(ShiftError::Conflict(
                "A record with the same unique value already exists".to_string(),
            ));
        }
        AppError(ShiftError::Database(err))
    }
}

/// Maps a ShiftError to an HTTP response
pub fn map_error(err: ShiftError) -> Response {
    AppError(err).into_response()
}

/// Converts failures of the timeout layer into responses.
pub async fn handle_timeout_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        let body = Json(json!({ "error": "Request timed out" }));
        (StatusCode::REQUEST_TIMEOUT, body).into_response()
    } else {
        map_error(ShiftError::Internal(err))
    }
}
