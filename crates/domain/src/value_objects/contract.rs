//! Shared value object contract and reusable validators
//!
//! Every concrete value object implements [`ValueObject`]. Construction
//! helpers are free functions so each type composes only the checks it needs.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::contract::{require_length, require_non_empty};
//!
//! let city = require_non_empty("city", "  Berlin ").unwrap();
//! assert_eq!(city, "Berlin");
//! assert!(require_length("city", city, 2, 100).is_ok());
//! assert!(require_non_empty("city", "   ").is_err());
//! ```

use std::{fmt, hash::Hash};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::errors::ValidationError;

/// An immutable domain primitive compared by value
///
/// Implementors keep their fields private and expose no mutating methods,
/// so a successfully constructed instance stays valid for its lifetime.
pub trait ValueObject: Clone + PartialEq + Eq + Hash + fmt::Debug + Serialize {
    /// Short name used in diagnostics
    const TYPE_NAME: &'static str;

    /// Compare the full field set of two values
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// Unwrap a required value, failing if it is absent
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Trim a string and fail if nothing remains
pub fn require_non_empty<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed)
}

/// Check that a value lies within `[min, max]`
pub fn require_in_range<T>(
    field: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<T, ValidationError>
where
    T: PartialOrd + fmt::Display,
{
    if value < min || value > max {
        return Err(ValidationError::range(
            field,
            format!("{value} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

/// Check that a string has between `min` and `max` characters
pub fn require_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::range(
            field,
            format!("must be {min}-{max} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Check that a string matches a pattern
///
/// `description` states the rule in the error message.
pub fn require_pattern(
    field: &'static str,
    value: &str,
    pattern: &Regex,
    description: &str,
) -> Result<(), ValidationError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::format(field, description))
    }
}

/// Parse an RFC 3339 timestamp into a UTC instant
///
/// Rejects strings that do not denote a real calendar instant, such as
/// `2025-02-30T00:00:00Z`.
pub fn parse_instant(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = require_non_empty(field, value)?;
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| {
            ValidationError::format(field, format!("must be an RFC 3339 timestamp ({e})"))
        })
}
