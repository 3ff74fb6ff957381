//! # ShiftCast API
//!
//! The API crate provides the web server for the ShiftCast scheduling service:
//! employee and shift management, a forecast preview and schedule generation.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Error mapping and request timeouts
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//! Schedule generation goes through the core [`Scheduler`], whose collaborators
//! are injected by the binary.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use shiftcast_core::{config::SchedulingConfig, ports::ForecastProvider, scheduler::Scheduler};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::error_handling::handle_timeout_error;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for the CRUD endpoints
    pub db_pool: PgPool,
    /// Scheduling pipeline used by `POST /api/schedule/generate`
    pub scheduler: Scheduler,
    /// Forecast source used by the preview endpoint
    pub forecast: Arc<dyn ForecastProvider>,
    /// Scheduling defaults (window size, seed, availability policy)
    pub settings: SchedulingConfig,
}

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the application router with all routes and the shared state.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Employee management and performance log endpoints
        .merge(routes::employee::routes())
        // Shift management endpoints
        .merge(routes::shift::routes())
        // Forecast preview endpoint
        .merge(routes::forecast::routes())
        // Schedule generation endpoint
        .merge(routes::schedule::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
}

/// Starts the API server with the provided configuration and state
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// init_tracing(config.log_level)?;
/// start_server(config, state).await?;
/// ```
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout and request tracing
    let app = app
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
