//! Domain validation errors.

use std::fmt;

/// Reasons a request is rejected before anything is stored.
///
/// The `Display` text is the exact message returned to the website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Room type, dates, name or email missing from a booking request.
    MissingBookingFields,

    /// Name, email or message missing from a contact request.
    MissingContactFields,

    /// Newsletter signup without an email.
    MissingEmail,

    /// Availability query without both dates.
    MissingDates,

    /// The room type is not part of the hotel inventory.
    InvalidRoomType(String),

    /// A date could not be parsed.
    InvalidDate(String),

    /// Check-out is on or before check-in.
    CheckOutNotAfterCheckIn,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBookingFields => write!(f, "Missing required fields."),
            Self::MissingContactFields => write!(f, "Name, email, and message are required."),
            Self::MissingEmail => write!(f, "Email required."),
            Self::MissingDates => write!(f, "Check-in and check-out dates required."),
            Self::InvalidRoomType(_) => write!(f, "Invalid room type."),
            Self::InvalidDate(_) => write!(f, "Invalid date."),
            Self::CheckOutNotAfterCheckIn => write!(f, "Check-out must be after check-in."),
        }
    }
}

impl std::error::Error for ValidationError {}
