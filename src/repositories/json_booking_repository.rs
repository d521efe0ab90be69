use crate::domain::BookingReference;
use crate::error::{StoreError, StoreResult};
use crate::models::Booking;
use crate::repositories::traits::BookingRepository;
use crate::store::{AsyncJsonStore, Collection};
use async_trait::async_trait;

/// Booking repository backed by `bookings.json`.
///
/// Lookups are a linear scan over the freshly loaded collection.
pub struct JsonBookingRepository {
    store: AsyncJsonStore,
}

impl JsonBookingRepository {
    pub fn new(store: AsyncJsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for JsonBookingRepository {
    async fn list(&self) -> StoreResult<Vec<Booking>> {
        self.store.load_or_empty(Collection::Bookings).await
    }

    async fn find_by_reference(
        &self,
        reference: &BookingReference,
    ) -> StoreResult<Option<Booking>> {
        let bookings = self.list().await?;
        Ok(bookings.into_iter().find(|b| &b.reference == reference))
    }

    async fn insert(&self, booking: &Booking) -> StoreResult<Booking> {
        let booking = booking.clone();

        self.store
            .update(Collection::Bookings, move |bookings: &mut Vec<Booking>| {
                if bookings.iter().any(|b| b.reference == booking.reference) {
                    return Err(StoreError::DuplicateKey(booking.reference.to_string()));
                }
                bookings.push(booking.clone());
                Ok(booking)
            })
            .await
    }
}
