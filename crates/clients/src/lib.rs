//! # ShiftCast Clients
//!
//! Outbound HTTP collaborators of the scheduler: the forecast service client
//! and the schedule notifiers.

pub mod config;
pub mod forecast;
pub mod notify;

use std::sync::Arc;

use eyre::Result;
use shiftcast_core::ports::Notifier;

use crate::{
    config::ClientConfig,
    notify::{LogNotifier, WebhookNotifier},
};

/// Webhook notifier when a URL is configured, log notifier otherwise.
pub fn notifier_from_config(config: &ClientConfig) -> Result<Arc<dyn Notifier>> {
    match &config.notify_webhook_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(url, config.timeout())?)),
        None => Ok(Arc::new(LogNotifier)),
    }
}
