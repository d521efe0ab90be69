//! In-memory test doubles for the repository and notifier seams.

mod mock_booking_repository;
mod mock_contact_repository;
mod mock_subscriber_repository;
mod recording_notifier;

#[allow(unused_imports)]
pub use mock_booking_repository::MockBookingRepository;
#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_subscriber_repository::MockSubscriberRepository;
#[allow(unused_imports)]
pub use recording_notifier::RecordingNotifier;
