use crate::domain::BookingReference;
use crate::error::StoreResult;
use crate::models::{Booking, Contact};
use async_trait::async_trait;

/// Repository for managing bookings.
///
/// Provides abstraction over booking storage and retrieval,
/// enabling different implementations (JSON files, in-memory mocks).
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Every stored booking, in insertion order.
    async fn list(&self) -> StoreResult<Vec<Booking>>;

    /// Find a booking by exact reference.
    async fn find_by_reference(&self, reference: &BookingReference)
        -> StoreResult<Option<Booking>>;

    /// Append a booking.
    ///
    /// Fails with `StoreError::DuplicateKey` if the reference is already stored.
    async fn insert(&self, booking: &Booking) -> StoreResult<Booking>;
}

/// Repository for managing contact messages.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Append a contact message.
    ///
    /// If the id is already taken it is bumped to the next free numeric id;
    /// the stored record is returned.
    async fn insert(&self, contact: &Contact) -> StoreResult<Contact>;
}

/// Repository for the newsletter subscriber set.
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Every subscribed email, in signup order.
    async fn list(&self) -> StoreResult<Vec<String>>;

    /// Add an email unless already present (exact match).
    ///
    /// Returns `true` when the email was newly added.
    async fn add(&self, email: &str) -> StoreResult<bool>;
}
