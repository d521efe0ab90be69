//! Availability calculation against the fixed room inventory.
//!
//! A booking occupies one unit of its category for every night of its stay.
//! The calculator counts bookings whose stay overlaps the requested range
//! and subtracts them from the inventory, never going below zero.

use crate::domain::{DateRange, RoomType};
use crate::models::{Availability, Booking};
use std::collections::BTreeMap;

/// Remaining units per category for `query`, given every stored booking.
///
/// Bookings with an unknown category or unparseable dates are skipped.
pub fn calculate_availability<'a, I>(query: &DateRange, bookings: I) -> Availability
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut booked: BTreeMap<RoomType, u32> = BTreeMap::new();

    for booking in bookings {
        let (Some(room_type), Some(stay)) = (booking.room_type(), booking.stay()) else {
            tracing::debug!(
                "Skipping booking {} with unknown room type or dates",
                booking.reference
            );
            continue;
        };

        if query.overlaps(&stay) {
            *booked.entry(room_type).or_insert(0) += 1;
        }
    }

    Availability::new(
        RoomType::ALL
            .into_iter()
            .map(|room_type| {
                let taken = booked.get(&room_type).copied().unwrap_or(0);
                (room_type, room_type.total_units().saturating_sub(taken))
            })
            .collect(),
    )
}
