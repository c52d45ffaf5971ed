//! Phone number defect detection and the PhoneNumber value object.

use super::errors::ValidationError;
use crate::config::{Config, MAX_PHONE_DIGITS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A problem detected in a phone number.
///
/// Serialized as its kebab-case code, e.g. `"contains-dashes"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneDefect {
    /// The number contains one or more `-` separators.
    ContainsDashes,
    /// Too few digits to include a 3-digit area code.
    NoAreaCode,
    /// A character other than digits, spaces, `-`, `(`, `)`, `+` or `.`.
    InvalidCharacters,
    /// More digits than a country code plus a 10-digit number.
    TooManyDigits,
}

impl PhoneDefect {
    /// The stable string code for this defect.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ContainsDashes => "contains-dashes",
            Self::NoAreaCode => "no-area-code",
            Self::InvalidCharacters => "invalid-characters",
            Self::TooManyDigits => "too-many-digits",
        }
    }
}

impl fmt::Display for PhoneDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Phone validator carrying the configured digit threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneValidator {
    min_digits: usize,
}

impl PhoneValidator {
    /// Create a validator using the digit threshold from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            min_digits: config.min_phone_digits,
        }
    }

    /// Detect defects in `phone`, in detection order.
    ///
    /// Returns an empty list when the number is fully valid.
    pub fn defects(&self, phone: &str) -> Vec<PhoneDefect> {
        let mut defects = Vec::new();
        let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();

        if phone.contains('-') {
            defects.push(PhoneDefect::ContainsDashes);
        }

        if digits.len() < self.min_digits {
            defects.push(PhoneDefect::NoAreaCode);
        }

        if !phone.chars().all(is_phone_char) {
            defects.push(PhoneDefect::InvalidCharacters);
        }

        let over_length = digits.len() > MAX_PHONE_DIGITS
            || (digits.len() == MAX_PHONE_DIGITS && digits.first() != Some(&'1'));
        if over_length {
            defects.push(PhoneDefect::TooManyDigits);
        }

        defects
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.')
}

/// A phone number with no detected defects.
///
/// # Example
///
/// ```
/// use form_validators::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123 4567").unwrap();
/// assert_eq!(phone.digits_only(), "15551234567");
/// assert!(PhoneNumber::new("555-5555").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber using the default rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying every detected defect.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_validator(phone, &PhoneValidator::default())
    }

    /// Create a new PhoneNumber using the given validator's rules.
    pub fn with_validator(
        phone: impl Into<String>,
        validator: &PhoneValidator,
    ) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let defects = validator.defects(&phone);

        if !defects.is_empty() {
            return Err(ValidationError::InvalidPhone { phone, defects });
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
