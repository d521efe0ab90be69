//! Room categories and the static hotel inventory.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bookable room category.
///
/// Each category carries its fixed unit count and nightly price in euros.
///
/// # Example
///
/// ```
/// use kaskady_server::domain::RoomType;
///
/// let suites: RoomType = "suites".parse().unwrap();
/// assert_eq!(suites.nightly_price(), 210);
/// assert_eq!(suites.total_units(), 29);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Rooms,
    Suites,
    Lux,
    Prestige,
}

impl RoomType {
    /// Every category, in the order the website lists them.
    pub const ALL: [RoomType; 4] = [
        RoomType::Rooms,
        RoomType::Suites,
        RoomType::Lux,
        RoomType::Prestige,
    ];

    /// Total number of units of this category.
    pub fn total_units(self) -> u32 {
        match self {
            RoomType::Rooms => 48,
            RoomType::Suites => 29,
            RoomType::Lux => 15,
            RoomType::Prestige => 6,
        }
    }

    /// Price per night in euros.
    pub fn nightly_price(self) -> u32 {
        match self {
            RoomType::Rooms => 120,
            RoomType::Suites => 210,
            RoomType::Lux => 280,
            RoomType::Prestige => 320,
        }
    }

    /// The wire name used in requests and stored bookings.
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Rooms => "rooms",
            RoomType::Suites => "suites",
            RoomType::Lux => "lux",
            RoomType::Prestige => "prestige",
        }
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidRoomType(s.to_string()))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
