//! Domain layer: validated value objects
//!
//! Immutable primitives for money, contact details, addresses, names and
//! time intervals. Construction validates and normalizes raw input, so every
//! instance that exists is valid. Values compare by their fields and
//! serialize to plain data for embedding in payloads.

pub mod errors;
pub mod value_objects;

pub use errors::ValidationError;
pub use value_objects::*;
