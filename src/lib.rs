//! Form Validators - input validation helpers for contact forms.
//!
//! Three independent, stateless validators:
//!
//! - **email**: `validate_email` returns whether a string looks like an email address
//! - **address**: `validate_address` checks a postal address asynchronously and
//!   reports the outcome exactly once
//! - **phone**: `validate_phone` returns the ordered list of defects in a phone number
//!
//! # Architecture
//!
//! - **domain**: Address record, email and phone value objects and their rules
//! - **validators**: Public entry points, including the async address validator
//! - **error**: Custom error types for precise error handling
//! - **config**: Rule configuration from environment variables
//! - **observability**: Logging setup

pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod validators;

pub use config::Config;
pub use domain::{Address, EmailAddress, PhoneDefect, PhoneNumber, PhoneValidator, ValidationError};
pub use error::{AddressError, AddressResult, ConfigError, ConfigResult};
pub use observability::init_logging;
pub use validators::{
    validate_address, validate_addresses, validate_email, validate_phone, AddressValidator,
    LocalAddressValidator,
};
