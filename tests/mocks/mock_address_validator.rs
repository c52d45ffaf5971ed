use async_trait::async_trait;
use form_validators::{Address, AddressError, AddressResult, AddressValidator};
use std::sync::{Arc, Mutex};

/// Mock address validator for testing.
///
/// Returns a fixed outcome and records every address it was asked about.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockAddressValidator {
    outcome: Result<bool, &'static str>,
    seen: Arc<Mutex<Vec<Address>>>,
}

#[allow(dead_code)]
impl MockAddressValidator {
    /// A validator that always reports the given validity.
    pub fn returning(valid: bool) -> Self {
        Self {
            outcome: Ok(valid),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A validator that always fails as if `field` were missing.
    pub fn failing(field: &'static str) -> Self {
        Self {
            outcome: Err(field),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of validate calls received.
    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// Addresses received, in call order.
    pub fn seen(&self) -> Vec<Address> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressValidator for MockAddressValidator {
    async fn validate(&self, address: &Address) -> AddressResult<bool> {
        self.seen.lock().unwrap().push(address.clone());
        self.outcome.map_err(AddressError::MissingField)
    }
}
