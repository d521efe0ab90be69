//! Data models for the hotel's stored records and request payloads.
//!
//! Records serialize with camelCase keys, matching the JSON files on disk
//! and the bodies the website sends.

pub mod availability;
pub mod booking;
pub mod contact;
pub mod newsletter;

pub use availability::{Availability, AvailabilityQuery};
pub use booking::{Booking, BookingRequest, Guests};
pub use contact::{Contact, ContactRequest};
pub use newsletter::NewsletterRequest;
