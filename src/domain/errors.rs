//! Domain validation errors.

use super::phone::PhoneDefect;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number has one or more defects.
    InvalidPhone {
        phone: String,
        defects: Vec<PhoneDefect>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone { phone, defects } => {
                let codes: Vec<&str> = defects.iter().map(|d| d.code()).collect();
                write!(f, "Invalid phone number: {} ({})", phone, codes.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phone_display_lists_codes() {
        let err = ValidationError::InvalidPhone {
            phone: "555-5555".to_string(),
            defects: vec![PhoneDefect::ContainsDashes, PhoneDefect::NoAreaCode],
        };
        assert_eq!(
            err.to_string(),
            "Invalid phone number: 555-5555 (contains-dashes, no-area-code)"
        );
    }
}
