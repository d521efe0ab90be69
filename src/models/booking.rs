//! Booking model representing a confirmed room reservation.

use crate::domain::{BookingReference, DateRange, RoomType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Guest count exactly as submitted.
///
/// API clients send numbers, HTML forms send text such as `"2"` or
/// `"2 Adults"`. The value is informational and stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Guests {
    Count(u64),
    Text(String),
    Other(serde_json::Value),
}

/// Treats `null` and blank text as absent; everything else is kept as sent.
fn deserialize_guests<'de, D>(deserializer: D) -> Result<Option<Guests>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Guests>::deserialize(deserializer)? {
        Some(Guests::Text(text)) if text.trim().is_empty() => None,
        guests => guests,
    })
}

/// A stored booking.
///
/// Dates are kept exactly as submitted so the JSON file reads the way the
/// guest typed them; `nights` and `total_price` are derived at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub reference: BookingReference,

    /// Room category wire name (see [`RoomType`])
    pub room_type: String,

    pub check_in: String,

    pub check_out: String,

    #[serde(
        default,
        deserialize_with = "deserialize_guests",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<Guests>,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,

    pub nights: u32,

    /// Total price in euros
    pub total_price: u64,

    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// The parsed room category, or `None` for a category the hotel no longer sells.
    pub fn room_type(&self) -> Option<RoomType> {
        self.room_type.parse().ok()
    }

    /// The parsed stay, or `None` if a stored date no longer parses.
    pub fn stay(&self) -> Option<DateRange> {
        DateRange::parse(&self.check_in, &self.check_out).ok()
    }
}

/// Body of `POST /api/booking`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_type: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    #[serde(deserialize_with = "deserialize_guests")]
    pub guests: Option<Guests>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
}
