use eyre::{Result, eyre};
use std::{env, time::Duration};

const DEFAULT_FORECAST_URL: &str = "http://localhost:8001";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the outbound HTTP clients.
///
/// The forecast service is required to generate schedules; the webhook is
/// optional and falls back to logging notices when unset.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the forecast service (defaults to http://localhost:8001)
    pub forecast_url: String,
    /// Request timeout for outbound calls, in seconds (defaults to 30)
    pub timeout_seconds: u64,
    /// Endpoint receiving schedule notices as JSON
    pub notify_webhook_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            notify_webhook_url: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let forecast_url =
            env::var("FORECAST_URL").unwrap_or_else(|_| DEFAULT_FORECAST_URL.to_string());

        let timeout_seconds = match env::var("FORECAST_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre!("FORECAST_TIMEOUT_SECONDS must be a valid u64"))?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        let notify_webhook_url = env::var("NOTIFY_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Ok(Self {
            forecast_url,
            timeout_seconds,
            notify_webhook_url,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
