//! Facade-level errors

use domain::ValidationError;
use thiserror::Error;

/// Errors raised while configuring or running the creation facade
#[derive(Debug, Error)]
pub enum FactoryError {
    /// A value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Tracing subscriber could not be installed
    #[error("Failed to initialize tracing: {0}")]
    Telemetry(String),
}
