//! Bookable time slot value object
//!
//! A slot includes its start and excludes its end, lasts at least one minute
//! and at most 24 hours. Back-to-back slots therefore do not overlap.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::contract::{ValueObject, parse_instant, require_in_range};
use crate::errors::ValidationError;

/// Shortest permitted slot in minutes
pub const MIN_SLOT_MINUTES: i64 = 1;
/// Longest permitted slot in minutes
pub const MAX_SLOT_MINUTES: i64 = 24 * 60;

/// A half-open interval `[start, end)` between one minute and one day long
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use domain::TimeSlot;
///
/// let nine = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
/// let slot = TimeSlot::with_duration(nine, 30).unwrap();
/// let next = TimeSlot::with_duration(slot.end(), 30).unwrap();
///
/// assert_eq!(slot.duration_minutes(), 30);
/// assert!(!slot.overlaps(&next));
/// assert!(slot.is_before(&next));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeSlotRecord")]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TimeSlotRecord {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Create a slot, requiring `end > start` and a duration within bounds
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::ordering(format!(
                "end ({}) must be after start ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        let duration = end - start;
        if duration < TimeDelta::minutes(MIN_SLOT_MINUTES) {
            return Err(ValidationError::range(
                "duration",
                format!("must be at least {MIN_SLOT_MINUTES} minute"),
            ));
        }
        if duration > TimeDelta::minutes(MAX_SLOT_MINUTES) {
            return Err(ValidationError::range(
                "duration",
                "must not exceed 24 hours",
            ));
        }

        Ok(Self { start, end })
    }

    /// Create a slot from two RFC 3339 timestamps
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_instant("start", start)?, parse_instant("end", end)?)
    }

    /// Create a slot of `minutes` length beginning at `start`
    pub fn with_duration(start: DateTime<Utc>, minutes: i64) -> Result<Self, ValidationError> {
        require_in_range("minutes", minutes, MIN_SLOT_MINUTES, MAX_SLOT_MINUTES)?;
        let end = start
            .checked_add_signed(TimeDelta::minutes(minutes))
            .ok_or_else(|| ValidationError::range("start", "is too late to add a duration"))?;
        Self::new(start, end)
    }

    /// Get the first instant of the slot
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Get the exclusive end of the slot
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check whether an instant falls in `[start, end)`
    pub fn is_within(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Check whether the two slots share any instant
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Check whether `other` lies entirely inside this slot
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check whether this slot ends at or before the start of `other`
    pub fn is_before(&self, other: &Self) -> bool {
        self.end <= other.start
    }

    /// Check whether this slot starts at or after the end of `other`
    pub fn is_after(&self, other: &Self) -> bool {
        self.start >= other.end
    }

    /// Check whether both slots start on the same UTC calendar day
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.start.date_naive() == other.start.date_naive()
    }

    /// Get the length of the slot
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whole minutes in the slot, rounded down
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}

impl ValueObject for TimeSlot {
    const TYPE_NAME: &'static str = "TimeSlot";
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

impl TryFrom<TimeSlotRecord> for TimeSlot {
    type Error = ValidationError;

    fn try_from(record: TimeSlotRecord) -> Result<Self, Self::Error> {
        Self::new(record.start, record.end)
    }
}
