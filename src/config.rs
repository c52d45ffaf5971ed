//! Configuration management for the validators.
//!
//! Rules default to the plain behavior (5-digit zip codes, 10-digit phone
//! numbers). They can be tuned through environment variables, optionally
//! read from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Most digits a phone number may carry (country code `1` plus ten digits).
pub const MAX_PHONE_DIGITS: usize = 11;

/// Configuration for the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum digit count for a phone number to include an area code (default: 10)
    pub min_phone_digits: usize,

    /// Accept ZIP+4 codes such as `55555-1234` (default: false)
    pub allow_zip_plus_four: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_MIN_DIGITS`: Digits required for an area code (default: 10)
    /// - `ZIP_ALLOW_PLUS_FOUR`: Accept ZIP+4 codes (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let min_phone_digits = Self::parse_env_usize("PHONE_MIN_DIGITS", 10)?;
        if min_phone_digits == 0 || min_phone_digits > MAX_PHONE_DIGITS {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_MIN_DIGITS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_PHONE_DIGITS),
            });
        }

        let allow_zip_plus_four = Self::parse_env_bool("ZIP_ALLOW_PLUS_FOUR", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            min_phone_digits,
            allow_zip_plus_four,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false or 1/0, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_phone_digits: 10,
            allow_zip_plus_four: false,
            log_level: "error".to_string(),
        }
    }
}
