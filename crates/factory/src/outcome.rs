//! Non-failing construction result

use domain::ValidationError;
use serde::Serialize;

/// Result of a lenient construction, serialized as `{ success, value?, error? }`
///
/// Exactly one of `value` and `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationOutcome<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> CreationOutcome<T> {
    /// Wrap a successfully constructed value
    pub const fn ok(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            error: None,
        }
    }

    /// Capture the message of a rejected construction
    pub fn failed(error: &ValidationError) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(error.to_string()),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.success
    }

    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Convert back into a `Result`, keeping the captured message
    pub fn into_result(self) -> Result<T, String> {
        match (self.value, self.error) {
            (Some(value), _) => Ok(value),
            (None, error) => Err(error.unwrap_or_default()),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for CreationOutcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::failed(&error),
        }
    }
}
