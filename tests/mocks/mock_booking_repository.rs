use async_trait::async_trait;
use kaskady_server::domain::BookingReference;
use kaskady_server::error::{StoreError, StoreResult};
use kaskady_server::models::Booking;
use kaskady_server::repositories::BookingRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock booking repository for testing.
///
/// Keeps bookings in memory, tracks method calls for verification and can be
/// told to reject inserts to exercise reference retries and storage failures.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockBookingRepository {
    bookings: Arc<Mutex<Vec<Booking>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    duplicate_inserts: Arc<Mutex<usize>>,
    broken: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookingRepository {
    /// Create a new empty MockBookingRepository.
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            duplicate_inserts: Arc::new(Mutex::new(0)),
            broken: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a booking to the mock repository.
    pub fn add_booking(&self, booking: Booking) {
        self.bookings.lock().unwrap().push(booking);
    }

    /// Snapshot of every stored booking.
    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    /// Report the next `count` inserts as reference clashes.
    pub fn reject_next_inserts(&self, count: usize) {
        *self.duplicate_inserts.lock().unwrap() = count;
    }

    /// Make every call fail as if the data directory were unwritable.
    pub fn break_storage(&self) {
        *self.broken.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_storage(&self) -> StoreResult<()> {
        if *self.broken.lock().unwrap() {
            return Err(StoreError::TaskJoin("storage unavailable".to_string()));
        }
        Ok(())
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn list(&self) -> StoreResult<Vec<Booking>> {
        self.track_call("list");
        self.check_storage()?;
        Ok(self.bookings())
    }

    async fn find_by_reference(
        &self,
        reference: &BookingReference,
    ) -> StoreResult<Option<Booking>> {
        self.track_call("find_by_reference");
        self.check_storage()?;

        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().find(|b| &b.reference == reference).cloned())
    }

    async fn insert(&self, booking: &Booking) -> StoreResult<Booking> {
        self.track_call("insert");
        self.check_storage()?;

        {
            let mut remaining = self.duplicate_inserts.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(StoreError::DuplicateKey(booking.reference.to_string()));
            }
        }

        let mut bookings = self.bookings.lock().unwrap();
        if bookings.iter().any(|b| b.reference == booking.reference) {
            return Err(StoreError::DuplicateKey(booking.reference.to_string()));
        }
        bookings.push(booking.clone());
        Ok(booking.clone())
    }
}
