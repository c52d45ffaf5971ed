//! Error types for the validators.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while validating an address.
///
/// These signal a processing failure. An address that is well-formed but
/// simply not valid (a bad zip, a blank city) is reported as `Ok(false)`,
/// never as an error.
#[derive(Error, Debug)]
pub enum AddressError {
    /// A required field is absent from the record
    #[error("Address is missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse an address record from JSON
    #[error("Malformed address record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The spawned validation task did not complete
    #[error("Address validation task failed: {0}")]
    TaskFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with AddressError
pub type AddressResult<T> = Result<T, AddressError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
