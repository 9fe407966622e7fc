//! Logging subscriber setup

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{FactoryConfig, LogFormat},
    error::FactoryError,
};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(config: &FactoryConfig) -> Result<(), FactoryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
    installed.map_err(|e| FactoryError::Telemetry(e.to_string()))?;

    info!(format = %config.log_format, "Tracing initialized");
    Ok(())
}
