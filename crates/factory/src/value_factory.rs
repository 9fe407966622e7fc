//! Creation facade over the domain value objects
//!
//! Every value type gets a strict constructor returning `Result` and a
//! lenient `try_*` constructor returning [`CreationOutcome`]. Both paths go
//! through [`ValueFactory::observe`], which records the outcome as a
//! structured `tracing` event.

use domain::{
    Address, AddressInput, DateRange, EmailAddress, Money, PersonName, PhoneNumber, TimeSlot,
    ValidationError, ValueObject,
};
use tracing::{debug, instrument, warn};

use crate::{config::FactoryConfig, outcome::CreationOutcome};

/// Builds value objects from raw input and logs every rejection
#[derive(Debug, Clone, Default)]
pub struct ValueFactory {
    config: FactoryConfig,
}

impl ValueFactory {
    pub const fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FactoryConfig {
        &self.config
    }

    #[instrument(level = "debug", skip_all)]
    pub fn email(&self, raw: &str) -> Result<EmailAddress, ValidationError> {
        self.observe(EmailAddress::new(raw))
    }

    pub fn try_email(&self, raw: &str) -> CreationOutcome<EmailAddress> {
        self.email(raw).into()
    }

    #[instrument(level = "debug", skip_all)]
    pub fn phone(&self, raw: &str) -> Result<PhoneNumber, ValidationError> {
        self.observe(PhoneNumber::new(raw))
    }

    pub fn try_phone(&self, raw: &str) -> CreationOutcome<PhoneNumber> {
        self.phone(raw).into()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn money(&self, amount: f64, currency: &str) -> Result<Money, ValidationError> {
        self.observe(Money::new(amount, currency))
    }

    pub fn try_money(&self, amount: f64, currency: &str) -> CreationOutcome<Money> {
        self.money(amount, currency).into()
    }

    /// Create an amount in the configured default currency
    pub fn money_in_default_currency(&self, amount: f64) -> Result<Money, ValidationError> {
        self.money(amount, &self.config.default_currency)
    }

    pub fn try_money_in_default_currency(&self, amount: f64) -> CreationOutcome<Money> {
        self.money_in_default_currency(amount).into()
    }

    #[instrument(level = "debug", skip_all)]
    pub fn address(&self, input: AddressInput) -> Result<Address, ValidationError> {
        self.observe(Address::new(input))
    }

    pub fn try_address(&self, input: AddressInput) -> CreationOutcome<Address> {
        self.address(input).into()
    }

    #[instrument(level = "debug", skip_all)]
    pub fn person_name(
        &self,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> Result<PersonName, ValidationError> {
        self.observe(PersonName::new(first_name, last_name, middle_name))
    }

    pub fn try_person_name(
        &self,
        first_name: &str,
        last_name: &str,
        middle_name: Option<&str>,
    ) -> CreationOutcome<PersonName> {
        self.person_name(first_name, last_name, middle_name).into()
    }

    /// Create a range from two RFC 3339 timestamps
    #[instrument(level = "debug", skip(self))]
    pub fn date_range(&self, start: &str, end: &str) -> Result<DateRange, ValidationError> {
        self.observe(DateRange::parse(start, end))
    }

    pub fn try_date_range(&self, start: &str, end: &str) -> CreationOutcome<DateRange> {
        self.date_range(start, end).into()
    }

    /// Create a slot from two RFC 3339 timestamps
    #[instrument(level = "debug", skip(self))]
    pub fn time_slot(&self, start: &str, end: &str) -> Result<TimeSlot, ValidationError> {
        self.observe(TimeSlot::parse(start, end))
    }

    pub fn try_time_slot(&self, start: &str, end: &str) -> CreationOutcome<TimeSlot> {
        self.time_slot(start, end).into()
    }

    fn observe<T: ValueObject>(
        &self,
        result: Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        match &result {
            Ok(_) => debug!(value_type = T::TYPE_NAME, "Value object created"),
            Err(error) => {
                let field = error.field().unwrap_or("-");
                if self.config.warn_on_rejection {
                    warn!(value_type = T::TYPE_NAME, field, %error, "Value object rejected");
                } else {
                    debug!(value_type = T::TYPE_NAME, field, %error, "Value object rejected");
                }
            },
        }
        result
    }
}
