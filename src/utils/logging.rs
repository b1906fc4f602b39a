//! Structured logging setup.
//!
//! The library only emits `tracing` events; binaries call [`init_logging`]
//! once at startup to install a subscriber. `RUST_LOG` takes precedence over
//! the configured level when set.

use crate::config::LoggingConfig;
use crate::error::{constants, AddressError, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber described by `config`.
///
/// # Errors
/// Returns `AddressError::LoggingError` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| {
        AddressError::LoggingError(format!("{}: {e}", constants::ERR_SUBSCRIBER_INSTALLED))
    })?;

    info!(
        app = %config.app_name,
        level = %config.log_level,
        json = config.json_format,
        "Logging initialized"
    );
    Ok(())
}
