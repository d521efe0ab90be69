//! Newsletter service layer.

use super::required;
use crate::domain::ValidationError;
use crate::error::ServiceResult;
use crate::metrics::Metrics;
use crate::models::NewsletterRequest;
use crate::notify::{notify_best_effort, templates, Notifier};
use crate::repositories::SubscriberRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of a signup; both count as success for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

/// Newsletter service trait for business operations.
#[async_trait]
pub trait NewsletterService: Send + Sync {
    /// Add an email to the subscriber set and welcome it, once.
    async fn subscribe(&self, request: NewsletterRequest) -> ServiceResult<SubscribeOutcome>;
}

/// Default implementation of NewsletterService.
pub struct NewsletterServiceImpl {
    subscribers: Arc<dyn SubscriberRepository>,
    notifier: Arc<dyn Notifier>,
    metrics: Metrics,
}

impl NewsletterServiceImpl {
    /// Create a new newsletter service.
    pub fn new(
        subscribers: Arc<dyn SubscriberRepository>,
        notifier: Arc<dyn Notifier>,
        metrics: Metrics,
    ) -> Self {
        Self {
            subscribers,
            notifier,
            metrics,
        }
    }
}

#[async_trait]
impl NewsletterService for NewsletterServiceImpl {
    async fn subscribe(&self, request: NewsletterRequest) -> ServiceResult<SubscribeOutcome> {
        let email = required(&request.email).ok_or(ValidationError::MissingEmail)?;

        if !self.subscribers.add(email).await? {
            tracing::debug!("{} is already subscribed", email);
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        self.metrics.record_subscriber_added();
        tracing::info!("New newsletter subscriber");

        notify_best_effort(
            self.notifier.as_ref(),
            &self.metrics,
            templates::newsletter_welcome(email),
        )
        .await;

        Ok(SubscribeOutcome::Subscribed)
    }
}
