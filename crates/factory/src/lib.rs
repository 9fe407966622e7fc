//! Creation facade for domain value objects
//!
//! Wraps every value object constructor in two calling conventions: a strict
//! form returning `Result`, and a lenient form returning a serializable
//! [`CreationOutcome`] that captures the failure message. All constructions
//! are logged through `tracing`.

pub mod config;
pub mod error;
pub mod outcome;
pub mod telemetry;
pub mod value_factory;

pub use config::{FactoryConfig, LogFormat};
pub use error::FactoryError;
pub use outcome::CreationOutcome;
pub use telemetry::init_tracing;
pub use value_factory::ValueFactory;
