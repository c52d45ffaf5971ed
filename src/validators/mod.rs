//! Validator entry points.
//!
//! - `validate_email`: synchronous predicate
//! - `validate_phone`: synchronous, returns ordered defect codes
//! - `validate_address`: asynchronous, completes exactly once

pub mod address;

pub use address::{validate_address, validate_addresses, AddressValidator, LocalAddressValidator};

use crate::domain::{email, PhoneDefect, PhoneValidator};

/// Check whether `input` looks like an email address (`local@domain.tld`).
pub fn validate_email(input: &str) -> bool {
    let valid = email::is_valid_email(input);
    tracing::debug!(valid = valid, "Email validated");
    valid
}

/// Detect defects in a phone number using the default rules.
///
/// Returns an empty list when the number is fully valid.
pub fn validate_phone(input: &str) -> Vec<PhoneDefect> {
    let defects = PhoneValidator::default().defects(input);
    tracing::debug!(defect_count = defects.len(), "Phone number validated");
    defects
}
