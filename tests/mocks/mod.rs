//! Test doubles for the validators.

pub mod mock_address_validator;

pub use mock_address_validator::MockAddressValidator;
