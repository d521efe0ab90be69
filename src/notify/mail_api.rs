//! HTTP mail relay notifier.
//!
//! Posts each message as JSON to a transactional mail API. The client is
//! synchronous (`ureq`) and is driven from async code through
//! `tokio::task::spawn_blocking`.

use super::{Notification, Notifier};
use crate::config::Config;
use crate::error::{NotifyError, NotifyResult};
use crate::metrics::{MailTimer, Metrics};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// JSON body sent to the relay.
#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Synchronous client for the mail relay.
#[derive(Clone)]
pub struct MailApiClient {
    url: String,
    api_key: String,
    from: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl MailApiClient {
    /// Build a client from configuration, or `None` when no relay is configured.
    pub fn from_config(config: &Config, metrics: Metrics) -> Option<Self> {
        let url = config.mail_api_url.clone()?;
        let api_key = config.mail_api_key.clone().unwrap_or_default();

        Some(Self::new(
            url,
            api_key,
            config.mail_from.clone(),
            Duration::from_secs(config.request_timeout),
            metrics,
        ))
    }

    pub fn new(
        url: String,
        api_key: String,
        from: String,
        timeout: Duration,
        metrics: Metrics,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            url,
            api_key,
            from,
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// The relay endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one message, blocking until the relay answers.
    pub fn send(&self, notification: &Notification) -> NotifyResult<()> {
        let timer = MailTimer::new(self.metrics.clone());
        let body = SendMailRequest {
            from: &self.from,
            to: &notification.to,
            subject: &notification.subject,
            html: &notification.html_body,
        };

        tracing::debug!("POST {} ({})", self.url, notification.subject);

        let result = self
            .agent
            .post(&self.url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(&body);

        match result {
            Ok(_) => {
                timer.complete();
                Ok(())
            }
            Err(e) => {
                timer.complete_with_error();
                Err(map_error(e))
            }
        }
    }
}

/// Map a ureq error to a NotifyError.
fn map_error(error: ureq::Error) -> NotifyError {
    match error {
        ureq::Error::Status(status, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            NotifyError::Rejected { status, message }
        }
        ureq::Error::Transport(transport) => NotifyError::Transport(transport.to_string()),
    }
}

/// Async [`Notifier`] over a [`MailApiClient`].
#[derive(Clone)]
pub struct MailApiNotifier {
    client: Arc<MailApiClient>,
}

impl MailApiNotifier {
    pub fn new(client: MailApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl Notifier for MailApiNotifier {
    async fn notify(&self, notification: Notification) -> NotifyResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send(&notification))
            .await
            .map_err(|e| NotifyError::TaskJoin(e.to_string()))?
    }
}
