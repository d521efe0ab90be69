//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for hotel concepts like room
//! categories, booking references and stay date ranges. These value objects
//! validate at construction time so handlers and services never see a
//! half-parsed request.

pub mod booking_reference;
pub mod dates;
pub mod errors;
pub mod room_type;

pub use booking_reference::BookingReference;
pub use dates::DateRange;
pub use errors::ValidationError;
pub use room_type::RoomType;
