//! Validation errors raised by value object construction and operations

use thiserror::Error;

/// Errors that can occur when constructing or combining value objects
///
/// Every variant names the offending parameter (where one exists) and the
/// rule that was violated. A value object is never partially constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required value was not supplied
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// Value was supplied but blank after trimming
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Value does not match the expected structure or character class
    #[error("{field} has an invalid format: {rule}")]
    Format { field: &'static str, rule: String },

    /// Value lies outside its permitted numeric, length or duration bounds
    #[error("{field} is out of range: {rule}")]
    Range { field: &'static str, rule: String },

    /// Interval endpoints are in the wrong order
    #[error("Invalid interval: {rule}")]
    Ordering { rule: String },

    /// Monetary operation across two different currencies
    #[error("Currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },
}

impl ValidationError {
    /// Create a format violation for a field
    pub fn format(field: &'static str, rule: impl Into<String>) -> Self {
        Self::Format {
            field,
            rule: rule.into(),
        }
    }

    /// Create a range violation for a field
    pub fn range(field: &'static str, rule: impl Into<String>) -> Self {
        Self::Range {
            field,
            rule: rule.into(),
        }
    }

    /// Create an ordering violation
    pub fn ordering(rule: impl Into<String>) -> Self {
        Self::Ordering { rule: rule.into() }
    }

    /// Name of the offending parameter, if the error concerns a single field
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::Format { field, .. }
            | Self::Range { field, .. } => Some(field),
            Self::Ordering { .. } | Self::CurrencyMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_error_message() {
        let err = ValidationError::Missing { field: "street" };
        assert_eq!(err.to_string(), "street is required");
    }

    #[test]
    fn empty_error_message() {
        let err = ValidationError::Empty { field: "email" };
        assert_eq!(err.to_string(), "email must not be empty");
    }

    #[test]
    fn format_error_message() {
        let err = ValidationError::format("currency", "must be a 3-letter uppercase code");
        assert_eq!(
            err.to_string(),
            "currency has an invalid format: must be a 3-letter uppercase code"
        );
    }

    #[test]
    fn range_error_message() {
        let err = ValidationError::range("firstName", "must be 1-50 characters");
        assert_eq!(
            err.to_string(),
            "firstName is out of range: must be 1-50 characters"
        );
    }

    #[test]
    fn ordering_error_message() {
        let err = ValidationError::ordering("end must not be before start");
        assert_eq!(
            err.to_string(),
            "Invalid interval: end must not be before start"
        );
    }

    #[test]
    fn currency_mismatch_error_message() {
        let err = ValidationError::CurrencyMismatch {
            left: "USD".to_string(),
            right: "EUR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Currency mismatch: cannot combine USD with EUR"
        );
    }

    #[test]
    fn field_is_reported_for_field_errors() {
        assert_eq!(
            ValidationError::Missing { field: "city" }.field(),
            Some("city")
        );
        assert_eq!(ValidationError::range("amount", "x").field(), Some("amount"));
        assert_eq!(ValidationError::ordering("x").field(), None);
    }
}
