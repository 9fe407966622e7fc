//! Email address value object with validation
//!
//! Provides a validated email address type that ensures proper format.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! // Create a valid email address
//! let email = EmailAddress::new("user@example.com").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Email addresses are normalized to lowercase
//! let email = EmailAddress::new("User@Example.COM").unwrap();
//! assert_eq!(email.as_str(), "user@example.com");
//!
//! // Invalid emails are rejected
//! assert!(EmailAddress::new("invalid").is_err());
//! assert!(EmailAddress::new("user@localhost").is_err());
//! ```

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::contract::{ValueObject, require_length, require_non_empty, require_pattern};
use crate::errors::ValidationError;

const FIELD: &str = "email";

/// Maximum length of a complete address
pub const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length of the part before `@`
pub const MAX_LOCAL_PART_LENGTH: usize = 64;
/// Maximum length of the part after `@`
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Local part `@` one or more dot-separated DNS labels (at least two)
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .expect("Failed to compile email pattern")
});

/// A validated email address
///
/// # Examples
///
/// ```
/// use domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.local_part(), "user");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// The input is trimmed and lowercased before validation, so
    /// normalization is a fixed point: re-parsing `as_str()` yields an
    /// equal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("  Hello@World.com ").unwrap();
    /// assert_eq!(email.to_string(), "hello@world.com");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank, does not follow the address
    /// grammar, or exceeds the length ceilings.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = require_non_empty(FIELD, email.as_ref())?.to_lowercase();

        require_pattern(
            FIELD,
            &value,
            &EMAIL_PATTERN,
            "must look like local@domain.tld",
        )?;

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| ValidationError::format(FIELD, "must contain @"))?;

        if local.starts_with('.') || local.ends_with('.') {
            return Err(ValidationError::format(
                FIELD,
                "local part must not start or end with a dot",
            ));
        }
        if local.contains("..") {
            return Err(ValidationError::format(
                FIELD,
                "local part must not contain consecutive dots",
            ));
        }

        require_length(FIELD, &value, 1, MAX_EMAIL_LENGTH)?;
        require_length(FIELD, local, 1, MAX_LOCAL_PART_LENGTH)?;
        require_length(FIELD, domain, 1, MAX_DOMAIN_LENGTH)?;

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| ValidationError::format(FIELD, e.to_string()))?;

        Ok(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the local part (before @)
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("user@example.com").unwrap();
    /// assert_eq!(email.local_part(), "user");
    /// ```
    pub fn local_part(&self) -> &str {
        self.value
            .split_once('@')
            .map_or("", |(local, _)| local)
    }

    /// Get the domain part (after @)
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("user@example.com").unwrap();
    /// assert_eq!(email.domain(), "example.com");
    /// ```
    pub fn domain(&self) -> &str {
        self.value
            .split_once('@')
            .map_or("", |(_, domain)| domain)
    }

    /// Check whether the address belongs to a domain, ignoring case
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("user@example.com").unwrap();
    /// assert!(email.is_from_domain("EXAMPLE.com"));
    /// assert!(!email.is_from_domain("example.org"));
    /// ```
    pub fn is_from_domain(&self, domain: &str) -> bool {
        self.domain().eq_ignore_ascii_case(domain.trim())
    }
}

impl ValueObject for EmailAddress {
    const TYPE_NAME: &'static str = "EmailAddress";
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Strategy for generating valid email local parts
    fn valid_local_part() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,15}"
    }

    /// Strategy for generating valid email domains
    fn valid_domain() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,10}\\.[a-z]{2,4}"
    }

    proptest! {
        #[test]
        fn valid_emails_are_accepted(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email = EmailAddress::new(format!("{local}@{domain}")).unwrap();
            prop_assert_eq!(email.local_part(), local.as_str());
            prop_assert_eq!(email.domain(), domain.as_str());
        }

        #[test]
        fn email_is_always_lowercase(input in "[A-Za-z]{1,10}@[A-Za-z]{1,10}\\.[a-z]{2,3}") {
            let email = EmailAddress::new(&input).unwrap();
            prop_assert_eq!(email.as_str(), email.as_str().to_lowercase());
        }

        #[test]
        fn email_roundtrips_through_display(
            local in valid_local_part(),
            domain in valid_domain()
        ) {
            let email = EmailAddress::new(format!("{local}@{domain}")).unwrap();
            let reparsed = EmailAddress::new(email.to_string()).unwrap();
            prop_assert_eq!(email, reparsed);
        }

        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assert!(EmailAddress::new(&s).is_err());
        }

        #[test]
        fn whitespace_is_trimmed(
            ws_before in "[ \t]{0,3}",
            local in "[a-z]{3,8}",
            domain in "[a-z]{3,8}\\.[a-z]{2,3}",
            ws_after in "[ \t]{0,3}"
        ) {
            let email = EmailAddress::new(format!("{ws_before}{local}@{domain}{ws_after}")).unwrap();
            prop_assert_eq!(email.as_str(), format!("{local}@{domain}"));
        }
    }
}
