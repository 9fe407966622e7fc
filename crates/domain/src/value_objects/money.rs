//! Money value object with fixed-point arithmetic
//!
//! Amounts are stored as whole cents so repeated arithmetic never drifts.
//! Every currency is rounded to two decimal places, including currencies
//! such as JPY (0 decimals) or KWD (3 decimals).
//!
//! # Examples
//!
//! ```
//! use domain::Money;
//!
//! let a = Money::new(0.1, "USD").unwrap();
//! let b = Money::new(0.2, "USD").unwrap();
//! let sum = a.add(&b).unwrap();
//! assert_eq!(sum.cents(), 30);
//! assert_eq!(sum.to_string(), "0.30 USD");
//!
//! // Currencies never mix
//! let euros = Money::new(1.0, "EUR").unwrap();
//! assert!(sum.add(&euros).is_err());
//! ```

use std::{cmp::Ordering, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::contract::{ValueObject, require_pattern};
use crate::errors::ValidationError;

/// Largest cent value that survives a round trip through `f64`
pub const MAX_CENTS: i64 = 9_007_199_254_740_991;

const CENTS_PER_UNIT: f64 = 100.0;

static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new("^[A-Z]{3}$").expect("Failed to compile currency pattern")
});

/// A currency-aware monetary amount rounded to two decimal places
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord", into = "MoneyRecord")]
pub struct Money {
    cents: i64,
    currency: String,
}

/// Plain-data projection used on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyRecord {
    amount: f64,
    currency: String,
}

impl Money {
    /// Create a monetary amount, rounding to the nearest cent
    ///
    /// Halves round up towards positive infinity: `0.125` becomes `0.13`,
    /// `-0.125` becomes `-0.12`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is NaN, infinite or too large to be
    /// represented exactly in cents, or if the currency is not a
    /// three-letter uppercase code.
    pub fn new(amount: f64, currency: impl AsRef<str>) -> Result<Self, ValidationError> {
        let currency = validate_currency(currency.as_ref())?;
        let cents = round_to_cents("amount", amount * CENTS_PER_UNIT, amount)?;
        Ok(Self { cents, currency })
    }

    /// Create a monetary amount from whole cents
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::Money;
    ///
    /// let price = Money::from_cents(1099, "EUR").unwrap();
    /// assert_eq!(price.amount(), 10.99);
    /// ```
    pub fn from_cents(cents: i64, currency: impl AsRef<str>) -> Result<Self, ValidationError> {
        let currency = validate_currency(currency.as_ref())?;
        check_cents("amount", cents)?;
        Ok(Self { cents, currency })
    }

    /// A zero amount in the given currency
    pub fn zero(currency: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::from_cents(0, currency)
    }

    /// The amount in currency units, exact to the cent
    pub fn amount(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT
    }

    /// The amount in whole cents
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// ISO 4217 currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Add two amounts of the same currency
    pub fn add(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_same_currency(other)?;
        let cents = self
            .cents
            .checked_add(other.cents)
            .ok_or_else(|| overflow("amount"))?;
        self.with_cents(cents)
    }

    /// Subtract an amount of the same currency
    pub fn subtract(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_same_currency(other)?;
        let cents = self
            .cents
            .checked_sub(other.cents)
            .ok_or_else(|| overflow("amount"))?;
        self.with_cents(cents)
    }

    /// Scale by a factor, rounding the result to the nearest cent
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::Money;
    ///
    /// let price = Money::new(10.0, "USD").unwrap();
    /// assert_eq!(price.multiply(0.075).unwrap().amount(), 0.75);
    /// ```
    pub fn multiply(&self, factor: f64) -> Result<Self, ValidationError> {
        require_finite("factor", factor)?;
        let cents = round_to_cents("amount", self.cents as f64 * factor, factor)?;
        self.with_cents(cents)
    }

    /// Divide by a non-zero divisor, rounding the result to the nearest cent
    pub fn divide(&self, divisor: f64) -> Result<Self, ValidationError> {
        require_finite("divisor", divisor)?;
        if divisor == 0.0 {
            return Err(ValidationError::range("divisor", "must not be zero"));
        }
        let cents = round_to_cents("amount", self.cents as f64 / divisor, divisor)?;
        self.with_cents(cents)
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            cents: self.cents.abs(),
            currency: self.currency.clone(),
        }
    }

    /// Flip the sign
    pub fn negate(&self) -> Self {
        Self {
            cents: -self.cents,
            currency: self.currency.clone(),
        }
    }

    /// Order two amounts of the same currency
    pub fn compare(&self, other: &Self) -> Result<Ordering, ValidationError> {
        self.ensure_same_currency(other)?;
        Ok(self.cents.cmp(&other.cents))
    }

    /// Check whether this amount exceeds another of the same currency
    pub fn is_greater_than(&self, other: &Self) -> Result<bool, ValidationError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Check whether this amount is below another of the same currency
    pub fn is_less_than(&self, other: &Self) -> Result<bool, ValidationError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Check whether the amount is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check whether the amount is above zero
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Check whether the amount is below zero
    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    fn with_cents(&self, cents: i64) -> Result<Self, ValidationError> {
        check_cents("amount", cents)?;
        Ok(Self {
            cents,
            currency: self.currency.clone(),
        })
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), ValidationError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(ValidationError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            })
        }
    }
}

fn validate_currency(currency: &str) -> Result<String, ValidationError> {
    let currency = currency.trim();
    require_pattern(
        "currency",
        currency,
        &CURRENCY_PATTERN,
        "must be a 3-letter uppercase ISO 4217 code",
    )?;
    Ok(currency.to_string())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::format(field, "must be a number, got NaN"));
    }
    if value.is_infinite() {
        return Err(ValidationError::range(field, "must be finite"));
    }
    Ok(())
}

/// Round a scaled amount to whole cents, halves towards positive infinity
///
/// `input` is the caller-supplied operand, checked before the scaled value.
fn round_to_cents(field: &'static str, scaled: f64, input: f64) -> Result<i64, ValidationError> {
    require_finite(field, input)?;
    let rounded = round_half_up(scaled);
    if !rounded.is_finite() || rounded.abs() > MAX_CENTS as f64 {
        return Err(overflow(field));
    }
    Ok(rounded as i64)
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn check_cents(field: &'static str, cents: i64) -> Result<(), ValidationError> {
    if cents.unsigned_abs() > MAX_CENTS.unsigned_abs() {
        return Err(overflow(field));
    }
    Ok(())
}

fn overflow(field: &'static str) -> ValidationError {
    ValidationError::range(
        field,
        format!("magnitude must not exceed {MAX_CENTS} cents"),
    )
}

impl ValueObject for Money {
    const TYPE_NAME: &'static str = "Money";
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount(), self.currency)
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = ValidationError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, record.currency)
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: f64) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn amount_is_rounded_to_cents() {
        assert_eq!(usd(10.456).cents(), 1046);
        assert_eq!(usd(10.454).cents(), 1045);
        assert_eq!(usd(-10.456).cents(), -1046);
    }

    #[test]
    fn halves_round_towards_positive_infinity() {
        assert_eq!(usd(0.125).cents(), 13);
        assert_eq!(usd(-0.125).cents(), -12);
        assert_eq!(usd(10.0).multiply(-0.00125).unwrap().cents(), -1);
        assert_eq!(usd(0.25).divide(-2.0).unwrap().cents(), -12);
    }

    #[test]
    fn rounding_helper_matches_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert!(round_half_up(f64::INFINITY).is_infinite());
    }

    #[test]
    fn decimal_addition_is_exact() {
        let sum = usd(0.1).add(&usd(0.2)).unwrap();
        assert_eq!(sum.cents(), 30);
        assert!((sum.amount() - 0.30).abs() < f64::EPSILON);
        assert_eq!(sum, usd(0.3));
    }

    #[test]
    fn repeated_addition_stays_exact() {
        let dime = usd(0.1);
        let mut total = Money::zero("USD").unwrap();
        for _ in 0..1000 {
            total = total.add(&dime).unwrap();
        }
        assert_eq!(total.cents(), 10_000);
        assert_eq!(total, usd(100.0));
    }

    #[test]
    fn nan_is_rejected() {
        let err = Money::new(f64::NAN, "USD").unwrap_err();
        assert!(matches!(err, ValidationError::Format { field: "amount", .. }));
    }

    #[test]
    fn infinity_is_rejected() {
        assert!(Money::new(f64::INFINITY, "USD").is_err());
        assert!(Money::new(f64::NEG_INFINITY, "USD").is_err());
    }

    #[test]
    fn oversized_amount_is_rejected() {
        let err = Money::new(1e17, "USD").unwrap_err();
        assert!(matches!(err, ValidationError::Range { field: "amount", .. }));
    }

    #[test]
    fn currency_must_be_three_uppercase_letters() {
        assert!(Money::new(1.0, "usd").is_err());
        assert!(Money::new(1.0, "US").is_err());
        assert!(Money::new(1.0, "USDT").is_err());
        assert!(Money::new(1.0, "U5D").is_err());
        assert!(Money::new(1.0, "").is_err());
        let err = Money::new(1.0, "dollars").unwrap_err();
        assert_eq!(err.field(), Some("currency"));
    }

    #[test]
    fn currency_is_trimmed() {
        assert_eq!(Money::new(1.0, " EUR ").unwrap().currency(), "EUR");
    }

    #[test]
    fn add_rejects_currency_mismatch() {
        let err = usd(1.0).add(&Money::new(1.0, "EUR").unwrap()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CurrencyMismatch {
                left: "USD".to_string(),
                right: "EUR".to_string(),
            }
        );
    }

    #[test]
    fn subtract() {
        let diff = usd(5.0).subtract(&usd(7.25)).unwrap();
        assert_eq!(diff.cents(), -225);
        assert!(diff.is_negative());
        assert!(usd(1.0).subtract(&Money::new(1.0, "GBP").unwrap()).is_err());
    }

    #[test]
    fn multiply_rounds() {
        assert_eq!(usd(19.99).multiply(3.0).unwrap().cents(), 5997);
        assert_eq!(usd(10.0).multiply(0.333).unwrap().cents(), 333);
        assert_eq!(usd(10.0).multiply(-1.5).unwrap().cents(), -1500);
    }

    #[test]
    fn multiply_rejects_non_finite_factor() {
        assert!(usd(1.0).multiply(f64::NAN).is_err());
        let err = usd(1.0).multiply(f64::INFINITY).unwrap_err();
        assert_eq!(err.field(), Some("factor"));
    }

    #[test]
    fn multiply_overflow_is_rejected() {
        assert!(usd(1_000_000.0).multiply(1e12).is_err());
    }

    #[test]
    fn divide_rounds() {
        assert_eq!(usd(10.0).divide(3.0).unwrap().cents(), 333);
        assert_eq!(usd(20.0).divide(3.0).unwrap().cents(), 667);
        assert_eq!(usd(1.0).divide(-4.0).unwrap().cents(), -25);
    }

    #[test]
    fn divide_rejects_zero_and_non_finite() {
        let err = usd(1.0).divide(0.0).unwrap_err();
        assert_eq!(err, ValidationError::range("divisor", "must not be zero"));
        assert!(usd(1.0).divide(-0.0).is_err());
        assert!(usd(1.0).divide(f64::NAN).is_err());
        assert!(usd(1.0).divide(f64::INFINITY).is_err());
    }

    #[test]
    fn abs_and_negate() {
        let debt = usd(-12.5);
        assert_eq!(debt.abs(), usd(12.5));
        assert_eq!(debt.negate(), usd(12.5));
        assert_eq!(usd(3.0).negate().negate(), usd(3.0));
        assert_eq!(Money::zero("USD").unwrap().negate().cents(), 0);
    }

    #[test]
    fn comparisons_require_matching_currency() {
        assert!(usd(2.0).is_greater_than(&usd(1.0)).unwrap());
        assert!(!usd(1.0).is_greater_than(&usd(1.0)).unwrap());
        assert!(usd(1.0).is_less_than(&usd(2.0)).unwrap());
        assert_eq!(usd(1.0).compare(&usd(1.0)).unwrap(), Ordering::Equal);

        let eur = Money::new(1.0, "EUR").unwrap();
        assert!(usd(2.0).is_greater_than(&eur).is_err());
        assert!(usd(2.0).is_less_than(&eur).is_err());
    }

    #[test]
    fn sign_predicates() {
        assert!(Money::zero("CHF").unwrap().is_zero());
        assert!(usd(0.01).is_positive());
        assert!(usd(-0.01).is_negative());
        assert!(usd(0.004).is_zero());
    }

    #[test]
    fn equality_requires_amount_and_currency() {
        assert_eq!(usd(1.0), usd(1.0));
        assert_ne!(usd(1.0), usd(1.01));
        assert_ne!(usd(1.0), Money::new(1.0, "EUR").unwrap());
        assert!(usd(1.0).equals(&usd(1.004)));
    }

    #[test]
    fn from_cents_bounds() {
        assert_eq!(Money::from_cents(MAX_CENTS, "USD").unwrap().cents(), MAX_CENTS);
        assert!(Money::from_cents(MAX_CENTS + 1, "USD").is_err());
        assert!(Money::from_cents(i64::MIN, "USD").is_err());
    }

    #[test]
    fn display_shows_two_decimals() {
        assert_eq!(usd(5.0).to_string(), "5.00 USD");
        assert_eq!(usd(-0.5).to_string(), "-0.50 USD");
    }

    #[test]
    fn serializes_amount_and_currency() {
        let json = serde_json::to_value(usd(12.346)).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 12.35, "currency": "USD" }));
    }

    #[test]
    fn deserialization_validates() {
        let parsed: Money =
            serde_json::from_str(r#"{"amount": 0.3, "currency": "EUR"}"#).unwrap();
        assert_eq!(parsed.cents(), 30);

        let bad: Result<Money, _> = serde_json::from_str(r#"{"amount": 1, "currency": "eur"}"#);
        assert!(bad.is_err());
    }
}
