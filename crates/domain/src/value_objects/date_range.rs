//! Inclusive calendar range value object
//!
//! Both endpoints belong to the range and a zero-length range is valid.
//! Day and month constructors use UTC calendar boundaries.
//!
//! # Examples
//!
//! ```
//! use domain::DateRange;
//!
//! let february = DateRange::for_month(2025, 2).unwrap();
//! assert_eq!(february.start().to_rfc3339(), "2025-02-01T00:00:00+00:00");
//! assert_eq!(february.end().to_rfc3339(), "2025-02-28T23:59:59.999+00:00");
//! assert_eq!(february.duration_days(), 27);
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::contract::{ValueObject, parse_instant, require_in_range};
use crate::errors::ValidationError;

/// A range of instants where both `start` and `end` are included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRecord")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct DateRangeRecord {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range, requiring `end >= start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::ordering(format!(
                "end ({}) must not be before start ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Create a range from two RFC 3339 timestamps
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_instant("start", start)?, parse_instant("end", end)?)
    }

    /// Midnight through 23:59:59.999 of a calendar day
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use domain::DateRange;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    /// let range = DateRange::for_day(day).unwrap();
    /// assert_eq!(range.duration_hours(), 23);
    /// ```
    pub fn for_day(date: NaiveDate) -> Result<Self, ValidationError> {
        let start = start_of_day(date);
        let next = date.succ_opt().ok_or_else(|| {
            ValidationError::range("date", "must not be the last representable day")
        })?;
        Self::new(start, last_instant_before(next))
    }

    /// First through last millisecond of a month (1-12)
    pub fn for_month(year: i32, month: u32) -> Result<Self, ValidationError> {
        require_in_range("month", month, 1, 12)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ValidationError::range("year", format!("{year} is not supported")))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| ValidationError::range("year", format!("{year} is not supported")))?;
        Self::new(start_of_day(first), last_instant_before(next))
    }

    /// Get the first included instant
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Get the last included instant
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check whether the two ranges share at least one instant
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Check whether `other` lies entirely inside this range
    pub fn includes(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check whether this range ends strictly before `other` starts
    pub fn is_before(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Check whether this range starts strictly after `other` ends
    pub fn is_after(&self, other: &Self) -> bool {
        self.start > other.end
    }

    /// Check whether an instant falls within the range, endpoints included
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// The shared part of two overlapping ranges
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Get the time between the endpoints
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whole days between the endpoints, rounded down
    pub fn duration_days(&self) -> i64 {
        self.duration().num_days()
    }

    /// Whole hours between the endpoints, rounded down
    pub fn duration_hours(&self) -> i64 {
        self.duration().num_hours()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn last_instant_before(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) - TimeDelta::milliseconds(1)
}

impl ValueObject for DateRange {
    const TYPE_NAME: &'static str = "DateRange";
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

impl TryFrom<DateRangeRecord> for DateRange {
    type Error = ValidationError;

    fn try_from(record: DateRangeRecord) -> Result<Self, Self::Error> {
        Self::new(record.start, record.end)
    }
}
