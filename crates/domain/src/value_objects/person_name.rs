//! Person name value object with title-case normalization
//!
//! # Examples
//!
//! ```
//! use domain::PersonName;
//!
//! let name = PersonName::new("mary-jane", "O'BRIEN", Some("ann")).unwrap();
//! assert_eq!(name.first_name(), "Mary-Jane");
//! assert_eq!(name.last_name(), "O'Brien");
//! assert_eq!(name.full_name(), "Mary-Jane Ann O'Brien");
//! assert_eq!(name.formal_name(), "O'Brien, Mary-Jane");
//! assert_eq!(name.initials(true), "M.A.O.");
//! ```

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::contract::{
    ValueObject, require, require_length, require_non_empty, require_pattern,
};
use crate::errors::ValidationError;

/// Maximum characters per name part
pub const MAX_NAME_PART_LENGTH: usize = 50;

/// Letters, spaces, hyphens and apostrophes with at least one letter
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"^[\p{L} '\-]*\p{L}[\p{L} '\-]*$").expect("Failed to compile name pattern")
});

/// Raw name fields as they arrive in a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNameInput {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
}

/// A validated, title-cased personal name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersonNameInput")]
pub struct PersonName {
    first_name: String,
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
}

impl PersonName {
    /// Validate and title-case each supplied name part
    ///
    /// A supplied middle name is validated like the other parts; pass
    /// `None` to omit it.
    pub fn new(
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let first_name = normalize_part("firstName", first_name)?;
        let last_name = normalize_part("lastName", last_name)?;
        let middle_name = middle_name
            .map(|middle| normalize_part("middleName", middle))
            .transpose()?;

        Ok(Self {
            first_name,
            last_name,
            middle_name,
        })
    }

    /// Get the title-cased first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the title-cased last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get the title-cased middle name, if one was given
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "First Middle Last", or the display name without a middle name
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => self.display_name(),
        }
    }

    /// "Last, First"
    pub fn formal_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Dotted initials, e.g. `J.D.` or `J.M.D.`
    pub fn initials(&self, include_middle: bool) -> String {
        let middle = if include_middle {
            self.middle_name.as_deref()
        } else {
            None
        };

        [Some(self.first_name.as_str()), middle, Some(self.last_name.as_str())]
            .into_iter()
            .flatten()
            .filter_map(|part| part.chars().find(|c| c.is_alphabetic()))
            .flat_map(|c| c.to_uppercase().chain(std::iter::once('.')))
            .collect()
    }
}

fn normalize_part(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = require_non_empty(field, raw)?;
    require_pattern(
        field,
        trimmed,
        &NAME_PATTERN,
        "may contain only letters, spaces, hyphens and apostrophes",
    )?;
    let normalized = title_case(trimmed);
    require_length(field, &normalized, 1, MAX_NAME_PART_LENGTH)?;
    Ok(normalized)
}

/// Capitalize the first letter after each space, hyphen or apostrophe
///
/// Letters whose case mapping expands to several characters (`ß`, `İ`) are
/// kept as they are, so the result has as many characters as the input and
/// title-casing it again changes nothing.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_whitespace() || c == '-' || c == '\'' {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.push(single_char(c.to_uppercase(), c));
            at_word_start = false;
        } else {
            result.push(single_char(c.to_lowercase(), c));
        }
    }
    result
}

fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

impl ValueObject for PersonName {
    const TYPE_NAME: &'static str = "PersonName";
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl TryFrom<PersonNameInput> for PersonName {
    type Error = ValidationError;

    fn try_from(input: PersonNameInput) -> Result<Self, Self::Error> {
        let first_name = require("firstName", input.first_name)?;
        let last_name = require("lastName", input.last_name)?;
        Self::new(&first_name, &last_name, input.middle_name.as_deref())
    }
}
