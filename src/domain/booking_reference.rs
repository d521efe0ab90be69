//! BookingReference value object.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static REFERENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^BK-[0-9A-Z]{1,16}$").expect("Failed to compile reference regex"));

const PREFIX: &str = "BK-";
const TOKEN_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A short human-readable booking reference such as `BK-4F7Q2ZKD`.
///
/// # Example
///
/// ```
/// use kaskady_server::domain::BookingReference;
///
/// let reference = BookingReference::parse("BK-LX3K9Q2A").unwrap();
/// assert_eq!(reference.as_str(), "BK-LX3K9Q2A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingReference(String);

impl BookingReference {
    /// Draw a fresh random reference.
    ///
    /// Uniqueness is not guaranteed here; the booking repository rejects a
    /// reference that is already stored and the caller draws again.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token: String = (0..TOKEN_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}{}", PREFIX, token))
    }

    /// Parse a reference supplied by a client or read from storage.
    ///
    /// Returns `None` for anything that cannot name a booking.
    pub fn parse(raw: &str) -> Option<Self> {
        if REFERENCE_REGEX.is_match(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for BookingReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for BookingReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BookingReference::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid booking reference: {}", s))
        })
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}
