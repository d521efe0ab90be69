//! Contact model representing a message sent through the website's contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A stored contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Millisecond timestamp id, unique within the collection
    pub id: String,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    pub message: String,

    pub submitted_at: DateTime<Utc>,
}

impl Contact {
    /// Pick an id for a new message that no stored message uses.
    ///
    /// Millisecond ids clash when two messages arrive in the same
    /// millisecond; the candidate is then bumped to the next free number.
    pub fn next_free_id<'a, I>(candidate: &str, taken: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let taken: HashSet<&str> = taken.into_iter().collect();
        if !taken.contains(candidate) {
            return candidate.to_string();
        }

        match candidate.parse::<u64>() {
            Ok(mut n) => loop {
                n += 1;
                let id = n.to_string();
                if !taken.contains(id.as_str()) {
                    return id;
                }
            },
            Err(_) => (1u64..)
                .map(|k| format!("{}-{}", candidate, k))
                .find(|id| !taken.contains(id.as_str()))
                .unwrap_or_else(|| candidate.to_string()),
        }
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            id: "1717236000000".to_string(),
            name: "Jana Nováková".to_string(),
            email: "jana@example.sk".to_string(),
            phone: None,
            message: "Do you allow dogs?".to_string(),
            submitted_at: "2024-06-01T10:00:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["id"], "1717236000000");
        assert!(value.get("submittedAt").is_some());
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_next_free_id() {
        assert_eq!(Contact::next_free_id("100", ["99", "101"]), "100");
        assert_eq!(Contact::next_free_id("100", ["100", "101", "103"]), "102");
        assert_eq!(Contact::next_free_id("abc", ["abc", "abc-1"]), "abc-2");
    }

    #[test]
    fn test_request_tolerates_missing_fields() {
        let request: ContactRequest = serde_json::from_str(r#"{"name":"Jana"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Jana"));
        assert!(request.email.is_none());
        assert!(request.message.is_none());
    }
}
