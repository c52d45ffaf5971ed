//! Domain value objects and types.
//!
//! This module contains the address record, the email and phone value
//! objects, and the rules each of them is checked against.

pub mod address;
pub mod email;
pub mod errors;
pub mod phone;

pub use address::Address;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{PhoneDefect, PhoneNumber, PhoneValidator};
