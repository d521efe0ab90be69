use async_trait::async_trait;
use kaskady_server::error::{NotifyError, NotifyResult};
use kaskady_server::notify::{Notification, Notifier};
use std::sync::{Arc, Mutex};

/// Notifier that records every message instead of sending it.
///
/// Can be switched to failing mode to check that delivery errors never
/// affect the stored record.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    failing: bool,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: true,
        }
    }

    /// Every notification handed to this notifier, including failed ones.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) -> NotifyResult<()> {
        self.sent.lock().unwrap().push(notification);
        if self.failing {
            return Err(NotifyError::Transport("relay unreachable".to_string()));
        }
        Ok(())
    }
}
