//! Postal address record and its validity rules.

use crate::error::{AddressError, AddressResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("Failed to compile zip regex"));
static ZIP_PLUS_FOUR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{4}$").expect("Failed to compile ZIP+4 regex")
});

/// A postal address submitted for validation.
///
/// Fields are optional so that a record missing a field entirely can be told
/// apart from one whose field is present but blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    #[serde(alias = "Zip")]
    pub zip: Option<String>,
}

impl Address {
    /// Create an address with every field present.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: Some(street.into()),
            city: Some(city.into()),
            zip: Some(zip.into()),
        }
    }

    /// Parse an address record from JSON.
    pub fn from_json(json: &str) -> AddressResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the address against the zip and required-field rules.
    ///
    /// Returns `Err(MissingField)` when a field is absent, otherwise whether
    /// the street and city are non-blank and the zip is well-formed.
    pub fn check(&self, allow_zip_plus_four: bool) -> AddressResult<bool> {
        let street = self
            .street
            .as_deref()
            .ok_or(AddressError::MissingField("street"))?;
        let city = self
            .city
            .as_deref()
            .ok_or(AddressError::MissingField("city"))?;
        let zip = self
            .zip
            .as_deref()
            .ok_or(AddressError::MissingField("zip"))?;

        if street.trim().is_empty() || city.trim().is_empty() {
            return Ok(false);
        }

        Ok(is_valid_zip(zip, allow_zip_plus_four))
    }
}

/// Check that `zip` is five ASCII digits, optionally followed by `-` and four more.
pub fn is_valid_zip(zip: &str, allow_plus_four: bool) -> bool {
    ZIP_RE.is_match(zip) || (allow_plus_four && ZIP_PLUS_FOUR_RE.is_match(zip))
}
