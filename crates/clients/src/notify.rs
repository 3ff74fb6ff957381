use std::time::Duration;

use async_trait::async_trait;
use eyre::Result;
use shiftcast_core::{
    errors::{ShiftError, ShiftResult},
    models::{employee::Employee, notice::ScheduleNotice, shift::Shift},
    ports::Notifier,
};
use tracing::info;

/// Posts each [`ScheduleNotice`] as JSON to a webhook. Any non-2xx status is
/// a failed delivery.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, employee: &Employee, shifts: &[Shift]) -> ShiftResult<()> {
        let notice = ScheduleNotice::new(employee, shifts);

        let response = self
            .client
            .post(&self.url)
            .json(&notice)
            .send()
            .await
            .map_err(|e| ShiftError::Notification(format!("Webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ShiftError::Notification(format!(
                "Webhook returned {} for {}: {}",
                status, notice.recipient, error_text
            )));
        }

        Ok(())
    }
}

/// Writes notices to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, employee: &Employee, shifts: &[Shift]) -> ShiftResult<()> {
        let notice = ScheduleNotice::new(employee, shifts);
        info!(
            recipient = %notice.recipient,
            subject = %notice.subject,
            "Schedule notice:\n{}",
            notice.body()
        );
        Ok(())
    }
}
