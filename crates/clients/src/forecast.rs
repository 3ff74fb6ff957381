use std::time::Duration;

use async_trait::async_trait;
use eyre::Result;
use shiftcast_core::{
    errors::{ShiftError, ShiftResult},
    models::forecast::ForecastPoint,
    ports::ForecastProvider,
};
use tracing::debug;

/// Client for the forecast service's `GET /forecast?days=N` endpoint.
#[derive(Debug, Clone)]
pub struct HttpForecastProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpForecastProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ForecastProvider for HttpForecastProvider {
    async fn forecast(&self, days_ahead: u32) -> ShiftResult<Vec<ForecastPoint>> {
        let url = format!("{}/forecast", self.base_url);
        debug!("Requesting {} days of forecast from {}", days_ahead, url);

        let response = self
            .client
            .get(&url)
            .query(&[("days", days_ahead)])
            .send()
            .await
            .map_err(|e| ShiftError::Forecast(format!("Forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ShiftError::Forecast(format!(
                "Forecast service returned {}: {}",
                status, error_text
            )));
        }

        let points = response
            .json::<Vec<ForecastPoint>>()
            .await
            .map_err(|e| ShiftError::Forecast(format!("Invalid forecast payload: {}", e)))?;

        debug!("Received {} forecast points", points.len());
        Ok(points)
    }
}
