//! Booking service layer.
//!
//! Business logic for creating bookings, looking them up by reference and
//! answering availability queries.

use super::{optional, required};
use crate::availability::calculate_availability;
use crate::domain::{BookingReference, DateRange, RoomType, ValidationError};
use crate::error::{ServiceError, ServiceResult, StoreError};
use crate::metrics::Metrics;
use crate::models::{Availability, AvailabilityQuery, Booking, BookingRequest};
use crate::notify::{notify_best_effort, templates, Notifier};
use crate::repositories::BookingRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// How many fresh references to draw before giving up on a clash.
const MAX_REFERENCE_ATTEMPTS: usize = 5;

/// Booking service trait for business operations.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Validate, price, persist and confirm a booking.
    async fn create_booking(&self, request: BookingRequest) -> ServiceResult<Booking>;

    /// Look up a booking by its exact reference.
    async fn get_booking(&self, reference: &str) -> ServiceResult<Booking>;

    /// Remaining units per room category for a date range.
    async fn check_availability(&self, query: AvailabilityQuery) -> ServiceResult<Availability>;
}

/// Default implementation of BookingService.
pub struct BookingServiceImpl {
    bookings: Arc<dyn BookingRepository>,
    notifier: Arc<dyn Notifier>,
    metrics: Metrics,
}

/// A booking request that passed validation.
struct ValidatedBooking<'a> {
    room_type: RoomType,
    stay: DateRange,
    check_in: &'a str,
    check_out: &'a str,
    name: &'a str,
    email: &'a str,
}

/// Validation helper functions.
impl BookingServiceImpl {
    /// Checks run in a fixed order so each request gets exactly one reason.
    fn validate(request: &BookingRequest) -> Result<ValidatedBooking<'_>, ValidationError> {
        let (Some(room_type), Some(check_in), Some(check_out), Some(name), Some(email)) = (
            required(&request.room_type),
            required(&request.check_in),
            required(&request.check_out),
            required(&request.name),
            required(&request.email),
        ) else {
            return Err(ValidationError::MissingBookingFields);
        };

        let room_type: RoomType = room_type.parse()?;
        let stay = DateRange::parse_stay(check_in, check_out)?;

        Ok(ValidatedBooking {
            room_type,
            stay,
            check_in,
            check_out,
            name,
            email,
        })
    }
}

impl BookingServiceImpl {
    /// Create a new booking service.
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        notifier: Arc<dyn Notifier>,
        metrics: Metrics,
    ) -> Self {
        Self {
            bookings,
            notifier,
            metrics,
        }
    }

    /// Insert under a fresh reference, drawing again if it is already taken.
    async fn insert_with_unique_reference(&self, mut booking: Booking) -> ServiceResult<Booking> {
        let mut attempt = 1;
        loop {
            match self.bookings.insert(&booking).await {
                Ok(stored) => return Ok(stored),
                Err(StoreError::DuplicateKey(taken)) if attempt < MAX_REFERENCE_ATTEMPTS => {
                    tracing::warn!("Booking reference {} already taken, drawing again", taken);
                    booking.reference = BookingReference::generate(&mut rand::thread_rng());
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    async fn create_booking(&self, request: BookingRequest) -> ServiceResult<Booking> {
        let valid = Self::validate(&request)?;

        let nights = valid.stay.nights();
        let total_price = u64::from(nights) * u64::from(valid.room_type.nightly_price());

        let booking = Booking {
            reference: BookingReference::generate(&mut rand::thread_rng()),
            room_type: valid.room_type.as_str().to_string(),
            check_in: valid.check_in.to_string(),
            check_out: valid.check_out.to_string(),
            guests: request.guests.clone(),
            name: valid.name.to_string(),
            email: valid.email.to_string(),
            phone: optional(&request.phone),
            special_requests: optional(&request.special_requests),
            nights,
            total_price,
            booked_at: Utc::now(),
        };

        let booking = self.insert_with_unique_reference(booking).await?;
        self.metrics.record_booking_created();
        tracing::info!(
            "Booking {} stored: {} x{} nights, €{}",
            booking.reference,
            booking.room_type,
            booking.nights,
            booking.total_price
        );

        notify_best_effort(
            self.notifier.as_ref(),
            &self.metrics,
            templates::booking_confirmation(&booking),
        )
        .await;

        Ok(booking)
    }

    async fn get_booking(&self, reference: &str) -> ServiceResult<Booking> {
        let not_found = || ServiceError::NotFound(format!("booking {}", reference));

        // A malformed reference cannot name a stored booking.
        let reference = BookingReference::parse(reference).ok_or_else(not_found)?;

        self.bookings
            .find_by_reference(&reference)
            .await?
            .ok_or_else(not_found)
    }

    async fn check_availability(&self, query: AvailabilityQuery) -> ServiceResult<Availability> {
        let (Some(check_in), Some(check_out)) =
            (required(&query.check_in), required(&query.check_out))
        else {
            return Err(ValidationError::MissingDates.into());
        };

        let range = DateRange::parse(check_in, check_out)?;
        let bookings = self.bookings.list().await?;

        Ok(calculate_availability(&range, &bookings))
    }
}
