//! Newsletter signup payload.
//!
//! Subscribers themselves are stored as a plain JSON array of email strings.

use serde::Deserialize;

/// Body of `POST /api/newsletter`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NewsletterRequest {
    pub email: Option<String>,
}
