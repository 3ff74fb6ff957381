//! Wiring shared by the `shiftcast` and `schedule-run` binaries.

use std::sync::Arc;

use eyre::Result;
use shiftcast_clients::{config::ClientConfig, forecast::HttpForecastProvider, notifier_from_config};
use shiftcast_core::{config::SchedulingConfig, ports::ForecastProvider, scheduler::Scheduler};
use shiftcast_db::{DbPool, gateway::PgShiftGateway};
use tracing::info;

/// Builds the scheduler over Postgres, the HTTP forecaster and the configured
/// notifier. The forecast provider is returned as well for preview use.
pub fn build_scheduler(
    pool: DbPool,
    settings: &SchedulingConfig,
    clients: &ClientConfig,
) -> Result<(Scheduler, Arc<dyn ForecastProvider>)> {
    let forecast: Arc<dyn ForecastProvider> =
        Arc::new(HttpForecastProvider::new(&clients.forecast_url, clients.timeout())?);
    let notifier = notifier_from_config(clients)?;
    let gateway = Arc::new(PgShiftGateway::new(pool));

    info!(
        "Scheduler configured: forecaster={}, webhook={}, policy={:?}",
        clients.forecast_url,
        clients.notify_webhook_url.as_deref().unwrap_or("none (log only)"),
        settings.availability_policy
    );

    let scheduler = Scheduler::new(forecast.clone(), gateway, notifier, settings.engine()?);
    Ok((scheduler, forecast))
}
