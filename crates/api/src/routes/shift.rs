use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/shifts",
            get(handlers::shift::list_shifts).post(handlers::shift::create_shift),
        )
        .route(
            "/api/shifts/:id",
            get(handlers::shift::get_shift).delete(handlers::shift::delete_shift),
        )
        .route("/api/shifts/:id/assign", post(handlers::shift::assign_shift))
}
