use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftcast::build_scheduler;
use shiftcast_api::{ApiState, config::ApiConfig, init_tracing};
use shiftcast_clients::config::ClientConfig;
use shiftcast_core::config::SchedulingConfig;
use shiftcast_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    let settings = SchedulingConfig::from_env()?;
    let clients = ClientConfig::from_env()?;

    init_tracing(config.log_level)?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let (scheduler, forecast) = build_scheduler(db_pool.clone(), &settings, &clients)?;
    let state = Arc::new(ApiState {
        db_pool,
        scheduler,
        forecast,
        settings,
    });

    // Start API server
    shiftcast_api::start_server(config, state).await?;

    Ok(())
}
