use super::{Notification, Notifier};
use crate::error::NotifyResult;
use async_trait::async_trait;

/// Notifier used when no mail relay is configured.
///
/// Logs the recipient and subject instead of sending anything.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> NotifyResult<()> {
        tracing::info!(
            "[EMAIL MOCK] To: {} | Subject: {}",
            notification.to,
            notification.subject
        );
        Ok(())
    }
}
