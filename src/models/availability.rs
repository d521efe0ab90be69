//! Availability query and result.

use crate::domain::RoomType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query string of `GET /api/availability`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// Remaining units per room category.
///
/// Serializes as `{"rooms": 47, "suites": 29, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<RoomType, u32>);

impl Availability {
    pub fn new(remaining: BTreeMap<RoomType, u32>) -> Self {
        Self(remaining)
    }

    /// Every category at full inventory.
    pub fn full() -> Self {
        Self(
            RoomType::ALL
                .into_iter()
                .map(|room_type| (room_type, room_type.total_units()))
                .collect(),
        )
    }

    /// Units left for a category.
    pub fn remaining(&self, room_type: RoomType) -> u32 {
        self.0.get(&room_type).copied().unwrap_or(0)
    }
}
