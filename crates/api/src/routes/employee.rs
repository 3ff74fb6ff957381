use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/employees",
            get(handlers::employee::list_employees).post(handlers::employee::create_employee),
        )
        .route(
            "/api/employees/:id",
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        )
        .route(
            "/api/employees/:id/performance",
            get(handlers::performance::list_performance_logs)
                .post(handlers::performance::create_performance_log),
        )
}
