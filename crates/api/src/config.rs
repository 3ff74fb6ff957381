//! Settings for the ShiftCast HTTP server.
//!
//! Scheduling behaviour lives in `shiftcast_core::config::SchedulingConfig` and
//! outbound services in `shiftcast_clients::config::ClientConfig`. This module
//! only covers how the server listens and what it connects to.
//!
//! | variable | default |
//! |---|---|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `3000` |
//! | `DATABASE_URL` | required, holds the employees and shifts tables |
//! | `LOG_LEVEL` | `info` |
//! | `API_CORS_ORIGINS` | unset, comma-separated origins of the staff dashboard |
//! | `API_REQUEST_TIMEOUT_SECONDS` | `30`, must leave room for a full scheduling run |

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Listener, database and middleware settings of the API server.
///
/// ```no_run
/// use shiftcast_api::config::ApiConfig;
///
/// let config = ApiConfig::from_env()?;
/// println!("ShiftCast listening on {}", config.server_addr());
/// # Ok::<(), eyre::Report>(())
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    /// Origins allowed to call the API from a browser. `None` adds no CORS layer.
    pub cors_origins: Option<Vec<String>>,
    /// Upper bound for one request in seconds, schedule generation included.
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Reads the server settings. Fails when `DATABASE_URL` is missing or
    /// `API_PORT` is not a port number. A malformed timeout falls back to 30s.
    pub fn from_env() -> Result<Self> {
        let host = env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| parse_origins(&origins))
            .filter(|origins| !origins.is_empty());

        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// `host:port` for the tokio listener.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level. Unknown values fall back to info.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
