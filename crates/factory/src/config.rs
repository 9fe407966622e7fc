//! Facade configuration
//!
//! Loaded in layers: built-in defaults, then an optional `value_objects`
//! file (TOML, JSON or YAML), then `VALUE_OBJECTS_*` environment variables.

use std::{fmt, path::Path};

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use domain::Money;
use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "value_objects";

/// Prefix for environment overrides, e.g. `VALUE_OBJECTS_DEFAULT_CURRENCY`
pub const ENV_PREFIX: &str = "VALUE_OBJECTS";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Settings for [`crate::ValueFactory`] and logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Currency used by `money_in_default_currency`
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Log rejected constructions at WARN instead of DEBUG
    #[serde(default)]
    pub warn_on_rejection: bool,

    /// Log format used by [`crate::init_tracing`]
    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            warn_on_rejection: false,
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl FactoryConfig {
    /// Load configuration from defaults, `value_objects.*` and the environment
    pub fn load() -> Result<Self, FactoryError> {
        let config = Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment())
            .build()?;
        Self::finish(&config)
    }

    /// Load configuration from an explicit file, still honouring the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, FactoryError> {
        let config = Self::builder()?
            .add_source(File::from(path.as_ref()).required(true))
            .add_source(environment())
            .build()?;
        Self::finish(&config)
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<(), FactoryError> {
        Money::zero(&self.default_currency)?;
        Ok(())
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, FactoryError> {
        Ok(Config::builder()
            .set_default("default_currency", default_currency())?
            .set_default("warn_on_rejection", false)?
            .set_default("log_format", LogFormat::default().to_string())?
            .set_default("log_filter", default_log_filter())?)
    }

    fn finish(config: &Config) -> Result<Self, FactoryError> {
        let loaded: Self = config.clone().try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}

/// Flat keys only: `VALUE_OBJECTS_LOG_FORMAT` sets `log_format`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .try_parsing(true)
}
