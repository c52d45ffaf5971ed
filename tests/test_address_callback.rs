//! Completion semantics of the callback-style address validator.

mod mocks;

use form_validators::{validate_address, validate_addresses, Address, AddressError};
use mocks::MockAddressValidator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn sample_address(zip: &str) -> Address {
    Address::new("123 Easy St", "Seattle", zip)
}

#[tokio::test]
async fn test_callback_not_called_synchronously() {
    let validator = MockAddressValidator::returning(true);
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let completion = validate_address(
        Arc::new(validator.clone()),
        sample_address("55555"),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(validator.call_count(), 0);

    completion.await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(validator.call_count(), 1);
}

#[tokio::test]
async fn test_callback_receives_error_not_result() {
    let validator = MockAddressValidator::failing("zip");
    let outcome = Arc::new(std::sync::Mutex::new(None));

    let slot = outcome.clone();
    validate_address(Arc::new(validator), sample_address("55555"), move |result| {
        *slot.lock().unwrap() = Some(result);
    })
    .await;

    let result = outcome.lock().unwrap().take().expect("callback should fire");
    assert!(matches!(result, Err(AddressError::MissingField("zip"))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_each_invocation_completes_exactly_once() {
    let validator = MockAddressValidator::returning(false);
    let calls = Arc::new(AtomicUsize::new(0));

    let completions: Vec<_> = (0..10)
        .map(|_| {
            let counter = calls.clone();
            tokio::spawn(validate_address(
                Arc::new(validator.clone()),
                sample_address("00000"),
                move |result| {
                    assert!(!result.unwrap());
                    counter.fetch_add(1, Ordering::SeqCst);
                },
            ))
        })
        .collect();

    for completion in completions {
        completion.await.unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert_eq!(validator.call_count(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_callback_waits_while_caller_blocks() {
    let validator = MockAddressValidator::returning(true);
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = calls.clone();
    let completion = validate_address(
        Arc::new(validator.clone()),
        sample_address("55555"),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    std::thread::sleep(std::time::Duration::from_millis(100));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(validator.call_count(), 0);

    completion.await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_batch_passes_each_address_through() {
    let validator = MockAddressValidator::returning(true);
    let addresses = vec![sample_address("11111"), sample_address("22222")];

    let results = validate_addresses(&validator, &addresses).await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| matches!(r, Ok(true))));
    assert_eq!(validator.seen(), addresses);
}
