//! Postal address value object

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::contract::{
    ValueObject, require, require_length, require_non_empty, require_pattern,
};
use crate::errors::ValidationError;

static PLACE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"^[\p{L} '.\-]+$").expect("Failed to compile place name pattern")
});

static POSTAL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"^[A-Za-z0-9 \-]+$").expect("Failed to compile postal code pattern")
});

const PLACE_NAME_RULE: &str = "may contain only letters, spaces, hyphens, apostrophes and periods";

/// Raw, unvalidated address fields
///
/// Every field is optional so that absent values from a JSON payload can be
/// reported as missing rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A validated postal address
///
/// # Examples
///
/// ```
/// use domain::Address;
///
/// let address = Address::from_parts("1 Main St", "Springfield", "IL", "62701", "USA").unwrap();
/// assert_eq!(address.single_line(), "1 Main St, Springfield, IL 62701, USA");
/// assert!(address.is_us_address());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AddressInput")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Minimum street length
    pub const STREET_MIN: usize = 3;
    /// Maximum street length
    pub const STREET_MAX: usize = 200;
    /// Minimum city, state and country length
    pub const NAME_MIN: usize = 2;
    /// Maximum city, state and country length
    pub const NAME_MAX: usize = 100;
    /// Minimum postal code length
    pub const POSTAL_CODE_MIN: usize = 3;
    /// Maximum postal code length
    pub const POSTAL_CODE_MAX: usize = 20;

    /// Validate and normalize raw address fields
    ///
    /// Each field is required and trimmed, then checked against its length
    /// bounds and character class.
    pub fn new(input: AddressInput) -> Result<Self, ValidationError> {
        let street = require("street", input.street)?;
        let city = require("city", input.city)?;
        let state = require("state", input.state)?;
        let postal_code = require("postalCode", input.postal_code)?;
        let country = require("country", input.country)?;

        let street = require_non_empty("street", &street)?;
        require_length("street", street, Self::STREET_MIN, Self::STREET_MAX)?;

        let city = require_non_empty("city", &city)?;
        require_length("city", city, Self::NAME_MIN, Self::NAME_MAX)?;
        require_pattern("city", city, &PLACE_NAME_PATTERN, PLACE_NAME_RULE)?;

        let state = require_non_empty("state", &state)?;
        require_length("state", state, Self::NAME_MIN, Self::NAME_MAX)?;

        let postal_code = require_non_empty("postalCode", &postal_code)?;
        require_length(
            "postalCode",
            postal_code,
            Self::POSTAL_CODE_MIN,
            Self::POSTAL_CODE_MAX,
        )?;
        require_pattern(
            "postalCode",
            postal_code,
            &POSTAL_CODE_PATTERN,
            "may contain only letters, digits, spaces and hyphens",
        )?;

        let country = require_non_empty("country", &country)?;
        require_length("country", country, Self::NAME_MIN, Self::NAME_MAX)?;
        require_pattern("country", country, &PLACE_NAME_PATTERN, PLACE_NAME_RULE)?;

        Ok(Self {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            postal_code: postal_code.to_string(),
            country: country.to_string(),
        })
    }

    /// Build an address from five present fields
    pub fn from_parts(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(AddressInput {
            street: Some(street.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            postal_code: Some(postal_code.into()),
            country: Some(country.into()),
        })
    }

    /// Get the trimmed street line
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Get the trimmed city
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the trimmed state or region
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Get the trimmed postal code
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Get the trimmed country
    pub fn country(&self) -> &str {
        &self.country
    }

    /// `{street}, {city}, {state} {postal}, {country}`
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.postal_code, self.country
        )
    }

    /// Three lines: street, `{city}, {state} {postal}`, country
    pub fn multi_line(&self) -> String {
        format!(
            "{}\n{}, {} {}\n{}",
            self.street, self.city, self.state, self.postal_code, self.country
        )
    }

    /// Check whether the country names the United States
    pub fn is_us_address(&self) -> bool {
        matches!(
            self.country.to_uppercase().as_str(),
            "USA" | "US" | "UNITED STATES"
        )
    }
}

impl ValueObject for Address {
    const TYPE_NAME: &'static str = "Address";
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.single_line())
    }
}

impl TryFrom<AddressInput> for Address {
    type Error = ValidationError;

    fn try_from(input: AddressInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self {
            street: Some(address.street),
            city: Some(address.city),
            state: Some(address.state),
            postal_code: Some(address.postal_code),
            country: Some(address.country),
        }
    }
}
