//! Contact service layer.
//!
//! Stores messages from the website's contact form and acknowledges them.

use super::{optional, required};
use crate::domain::ValidationError;
use crate::error::ServiceResult;
use crate::metrics::Metrics;
use crate::models::{Contact, ContactRequest};
use crate::notify::{notify_best_effort, templates, Notifier};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate and store a message, then acknowledge it by e-mail.
    async fn submit_contact(&self, request: ContactRequest) -> ServiceResult<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
    notifier: Arc<dyn Notifier>,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        notifier: Arc<dyn Notifier>,
        metrics: Metrics,
    ) -> Self {
        Self {
            contacts,
            notifier,
            metrics,
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit_contact(&self, request: ContactRequest) -> ServiceResult<Contact> {
        let (Some(name), Some(email), Some(message)) = (
            required(&request.name),
            required(&request.email),
            required(&request.message),
        ) else {
            return Err(ValidationError::MissingContactFields.into());
        };

        let now = Utc::now();
        let contact = Contact {
            id: now.timestamp_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(&request.phone),
            message: message.to_string(),
            submitted_at: now,
        };

        let contact = self.contacts.insert(&contact).await?;
        self.metrics.record_contact_received();
        tracing::info!("Contact message {} stored", contact.id);

        notify_best_effort(
            self.notifier.as_ref(),
            &self.metrics,
            templates::contact_acknowledgement(&contact),
        )
        .await;

        Ok(contact)
    }
}
