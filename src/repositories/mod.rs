mod json_booking_repository;
mod json_contact_repository;
mod json_subscriber_repository;
mod traits;

pub use json_booking_repository::JsonBookingRepository;
pub use json_contact_repository::JsonContactRepository;
pub use json_subscriber_repository::JsonSubscriberRepository;
pub use traits::{BookingRepository, ContactRepository, SubscriberRepository};
