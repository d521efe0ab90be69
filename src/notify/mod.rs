//! Notification sink for guest e-mails.
//!
//! Services hand a [`Notification`] to a [`Notifier`] after the record is
//! persisted. Delivery is best-effort: a failure is logged and counted but
//! never undoes the stored record or changes the response.

mod log_notifier;
mod mail_api;
pub mod templates;

pub use log_notifier::LogNotifier;
pub use mail_api::{MailApiClient, MailApiNotifier};

use crate::error::NotifyResult;
use crate::metrics::Metrics;
use async_trait::async_trait;
use serde::Serialize;

/// An outgoing e-mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    #[serde(rename = "html")]
    pub html_body: String,
}

/// Anything that can deliver a [`Notification`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> NotifyResult<()>;
}

/// Deliver a notification, logging and counting any failure.
pub async fn notify_best_effort(
    notifier: &dyn Notifier,
    metrics: &Metrics,
    notification: Notification,
) {
    let to = notification.to.clone();
    let subject = notification.subject.clone();

    if let Err(e) = notifier.notify(notification).await {
        metrics.record_notification_failed();
        tracing::error!("Failed to send \"{}\" to {}: {}", subject, to, e);
    }
}
