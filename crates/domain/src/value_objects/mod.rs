//! Value Objects - Immutable, identity-less domain primitives

pub mod contract;

mod address;
mod date_range;
mod email_address;
mod money;
mod person_name;
mod phone_number;
mod time_slot;

pub use address::{Address, AddressInput};
pub use contract::ValueObject;
pub use date_range::DateRange;
pub use email_address::EmailAddress;
pub use money::Money;
pub use person_name::{PersonName, PersonNameInput};
pub use phone_number::PhoneNumber;
pub use time_slot::TimeSlot;
