//! Phone number value object with E.164 validation
//!
//! The country code split is a length heuristic, not a numbering-plan
//! lookup: numbers starting with `1` (NANP) or `7` (Russia/Kazakhstan) get a
//! one-digit code and everything else a two-digit code. Numbers from
//! countries with three-digit codes (e.g. `+353`) are mis-split.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::contract::{ValueObject, require_in_range, require_non_empty};
use crate::errors::ValidationError;

const FIELD: &str = "phone";

/// Characters stripped before validation
const SEPARATORS: [char; 5] = [' ', '-', '(', ')', '.'];

/// Shortest accepted number, including the leading `+`
pub const MIN_PHONE_LENGTH: usize = 8;
/// Longest accepted number, including the leading `+`
pub const MAX_PHONE_LENGTH: usize = 16;

/// A validated phone number in E.164 format (e.g., +14155552671)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
    country_code: String,
    national_number: String,
}

impl PhoneNumber {
    /// Create a new phone number, validating E.164 format
    ///
    /// E.164 format: +[country code][subscriber number]
    /// - Spaces, hyphens, parentheses and dots are stripped first
    /// - Starts with +
    /// - Contains only digits after +, the first one 1-9
    /// - Length: 8-16 characters including the +
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::PhoneNumber;
    ///
    /// let phone = PhoneNumber::new("+1 (415) 555-2671").unwrap();
    /// assert_eq!(phone.as_str(), "+14155552671");
    /// assert_eq!(phone.country_code(), "+1");
    /// assert_eq!(phone.national_number(), "4155552671");
    /// ```
    pub fn new(number: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = require_non_empty(FIELD, number.as_ref())?.replace(SEPARATORS, "");

        let digits = value
            .strip_prefix('+')
            .ok_or_else(|| ValidationError::format(FIELD, "must start with +"))?;

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::format(
                FIELD,
                "must contain only digits after +",
            ));
        }

        if digits.starts_with('0') {
            return Err(ValidationError::format(
                FIELD,
                "country code must not start with 0",
            ));
        }

        require_in_range(FIELD, value.len(), MIN_PHONE_LENGTH, MAX_PHONE_LENGTH)?;

        let code_len = country_code_length(digits);
        let (code, national) = digits.split_at(code_len);
        let country_code = format!("+{code}");
        let national_number = national.to_string();

        Ok(Self {
            value,
            country_code,
            national_number,
        })
    }

    /// Get the phone number as a string slice (E.164 format)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get digits only (without +)
    pub fn digits(&self) -> &str {
        self.value.strip_prefix('+').unwrap_or(&self.value)
    }

    /// Country calling code including the `+`
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Subscriber number without the country code
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// Check if this is a North American Numbering Plan number (+1)
    pub fn is_north_american(&self) -> bool {
        self.country_code == "+1"
    }

    /// Check the country code, with or without a leading `+`
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::PhoneNumber;
    ///
    /// let phone = PhoneNumber::new("+491234567890").unwrap();
    /// assert!(phone.is_from_country("49"));
    /// assert!(phone.is_from_country("+49"));
    /// assert!(!phone.is_from_country("+1"));
    /// ```
    pub fn is_from_country(&self, code: &str) -> bool {
        let code = code.trim();
        let code = code.strip_prefix('+').unwrap_or(code);
        self.country_code.strip_prefix('+') == Some(code)
    }

    /// Human-readable rendering
    ///
    /// North American ten-digit numbers render as `+1 (AAA) EEE-LLLL`,
    /// everything else as `{code} {national}`.
    pub fn formatted(&self) -> String {
        let national = self.national_number.as_str();
        if self.is_north_american() && national.len() == 10 {
            let (area, rest) = national.split_at(3);
            let (exchange, line) = rest.split_at(3);
            return format!("+1 ({area}) {exchange}-{line}");
        }
        format!("{} {}", self.country_code, national)
    }
}

/// Number of leading digits treated as the country code
fn country_code_length(digits: &str) -> usize {
    match digits.as_bytes().first() {
        Some(b'1' | b'7') => 1,
        _ => 2,
    }
}

impl ValueObject for PhoneNumber {
    const TYPE_NAME: &'static str = "PhoneNumber";
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}
