//! Asynchronous address validation.
//!
//! `AddressValidator` is the async seam; `validate_address` adapts it to a
//! completion callback that fires exactly once, and only after the caller
//! yields to the runtime.

use crate::config::Config;
use crate::domain::Address;
use crate::error::{AddressError, AddressResult};
use async_trait::async_trait;
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;

/// Validates postal addresses.
///
/// The outcome is error XOR validity: `Err` signals a processing failure,
/// `Ok(false)` a well-formed address that does not pass the rules.
#[async_trait]
pub trait AddressValidator: Send + Sync {
    /// Validate a single address.
    async fn validate(&self, address: &Address) -> AddressResult<bool>;
}

/// Address validator that checks the record locally, without any I/O.
#[derive(Debug, Clone, Default)]
pub struct LocalAddressValidator {
    allow_zip_plus_four: bool,
}

impl LocalAddressValidator {
    /// Create a validator using the zip rules from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            allow_zip_plus_four: config.allow_zip_plus_four,
        }
    }
}

#[async_trait]
impl AddressValidator for LocalAddressValidator {
    async fn validate(&self, address: &Address) -> AddressResult<bool> {
        // Never resolve within the caller's first poll.
        tokio::task::yield_now().await;

        let result = address.check(self.allow_zip_plus_four);
        match &result {
            Ok(valid) => tracing::debug!(valid = *valid, "Address validated"),
            Err(e) => tracing::debug!(error = %e, "Address validation failed"),
        }
        result
    }
}

/// Validate `address` and report the outcome to `on_complete`.
///
/// Nothing runs until the returned future is first polled, so `on_complete`
/// never fires while the caller is still in its synchronous step, whatever
/// the runtime flavor. Once polled, `on_complete` runs exactly once. A
/// validator that panics is reported as `AddressError::TaskFailed`.
///
/// Must be polled from within a tokio runtime.
pub fn validate_address<F>(
    validator: Arc<dyn AddressValidator>,
    address: Address,
    on_complete: F,
) -> impl Future<Output = ()> + Send + 'static
where
    F: FnOnce(AddressResult<bool>) + Send + 'static,
{
    async move {
        let outcome = tokio::spawn(async move { validator.validate(&address).await })
            .await
            .unwrap_or_else(|e| Err(AddressError::TaskFailed(e.to_string())));

        on_complete(outcome);
    }
}

/// Validate a batch of addresses concurrently.
///
/// Results are returned in input order.
pub async fn validate_addresses(
    validator: &dyn AddressValidator,
    addresses: &[Address],
) -> Vec<AddressResult<bool>> {
    let results = join_all(addresses.iter().map(|address| validator.validate(address))).await;

    tracing::debug!(
        count = results.len(),
        valid = results.iter().filter(|r| matches!(r, Ok(true))).count(),
        "Address batch validated"
    );

    results
}
