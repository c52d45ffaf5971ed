//! Logging setup.
//!
//! Validators emit `tracing` events at debug level. Applications that want to
//! see them install a subscriber with `init_logging`.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `Config::log_level`. Fails if a global subscriber is already installed.
pub fn init_logging(config: &Config) -> ConfigResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(format!("Failed to install subscriber: {}", e)))
}
