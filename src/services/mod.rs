//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories and the notification sink. They provide a clean boundary
//! between the HTTP handlers and the data access layer.

mod booking_service;
mod contact_service;
mod newsletter_service;

pub use booking_service::{BookingService, BookingServiceImpl};
pub use contact_service::{ContactService, ContactServiceImpl};
pub use newsletter_service::{NewsletterService, NewsletterServiceImpl, SubscribeOutcome};

/// A required text field: present and not blank, trimmed.
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// An optional text field, with blank input treated as absent.
fn optional(field: &Option<String>) -> Option<String> {
    required(field).map(str::to_string)
}
