//! Stay date ranges and the overlap test.

use super::errors::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Parse a request date.
///
/// Accepts a calendar date (`2024-06-01`, taken as UTC midnight) or a full
/// RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// A half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Parse both ends without checking their order.
    ///
    /// Availability queries are answered for inverted ranges too, using the
    /// same overlap test.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Parse a stay, requiring check-out strictly after check-in.
    pub fn parse_stay(check_in: &str, check_out: &str) -> Result<Self, ValidationError> {
        let range = Self::parse(check_in, check_out)?;
        if range.end <= range.start {
            return Err(ValidationError::CheckOutNotAfterCheckIn);
        }
        Ok(range)
    }

    /// Number of nights, rounding any partial day up.
    pub fn nights(&self) -> u32 {
        let millis = (self.end - self.start).num_milliseconds();
        if millis <= 0 {
            return 0;
        }
        let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Half-open overlap: ranges that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}
