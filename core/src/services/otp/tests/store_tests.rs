//! Unit tests for the credential store

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::challenge::DeliveryMethod;
use crate::services::otp::store::{CredentialStore, VerifyOutcome};

use super::mocks::ManualClock;

const TTL_MINUTES: i64 = 10;

fn store_with_clock() -> (CredentialStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    (CredentialStore::new(clock.clone()), clock)
}

#[test]
fn test_put_then_get() {
    let (store, _clock) = store_with_clock();

    let challenge = store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);
    assert_eq!(
        challenge.expires_at - challenge.issued_at,
        Duration::minutes(TTL_MINUTES)
    );

    let fetched = store.get("a@x.com").unwrap();
    assert_eq!(fetched.code, "123456");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_put_overwrites_prior_challenge() {
    let (store, _clock) = store_with_clock();

    store.put("a@x.com", "111111", DeliveryMethod::Email, TTL_MINUTES);
    store.put("a@x.com", "222222", DeliveryMethod::Email, TTL_MINUTES);

    assert_eq!(store.len(), 1);
    // The old code is permanently invalid
    assert_eq!(
        store.verify_and_consume("a@x.com", "111111"),
        VerifyOutcome::Mismatch
    );
    assert_eq!(
        store.verify_and_consume("a@x.com", "222222"),
        VerifyOutcome::Verified
    );
}

#[test]
fn test_get_lazily_evicts_expired() {
    let (store, clock) = store_with_clock();

    store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);
    clock.advance(Duration::minutes(TTL_MINUTES) + Duration::seconds(1));

    assert!(store.get("a@x.com").is_none());
    // Eviction happened, not just filtering
    assert_eq!(store.len(), 0);
}

#[test]
fn test_consume_is_idempotent() {
    let (store, _clock) = store_with_clock();

    store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);
    store.consume("a@x.com");
    store.consume("a@x.com");

    assert!(store.get("a@x.com").is_none());
}

#[test]
fn test_verify_and_consume_is_single_use() {
    let (store, _clock) = store_with_clock();

    store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);

    assert_eq!(
        store.verify_and_consume("a@x.com", "123456"),
        VerifyOutcome::Verified
    );
    // Replay of the correct code after success
    assert_eq!(
        store.verify_and_consume("a@x.com", "123456"),
        VerifyOutcome::NotFound
    );
}

#[test]
fn test_mismatch_leaves_challenge_live() {
    let (store, _clock) = store_with_clock();

    store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);

    assert_eq!(
        store.verify_and_consume("a@x.com", "000000"),
        VerifyOutcome::Mismatch
    );
    assert_eq!(
        store.verify_and_consume("a@x.com", "123456"),
        VerifyOutcome::Verified
    );
}

#[test]
fn test_expired_challenge_verifies_as_not_found() {
    let (store, clock) = store_with_clock();

    store.put("a@x.com", "123456", DeliveryMethod::Email, TTL_MINUTES);
    clock.advance(Duration::minutes(TTL_MINUTES) + Duration::seconds(1));

    assert_eq!(
        store.verify_and_consume("a@x.com", "123456"),
        VerifyOutcome::NotFound
    );
    assert_eq!(store.len(), 0);
}

#[test]
fn test_sweep_removes_only_expired() {
    let (store, clock) = store_with_clock();

    store.put("old@x.com", "111111", DeliveryMethod::Email, TTL_MINUTES);
    clock.advance(Duration::minutes(TTL_MINUTES) + Duration::seconds(1));
    store.put("fresh@x.com", "222222", DeliveryMethod::Email, TTL_MINUTES);

    assert_eq!(store.sweep_expired(), 1);
    assert_eq!(store.len(), 1);
    assert!(store.get("fresh@x.com").is_some());

    // Nothing left to sweep
    assert_eq!(store.sweep_expired(), 0);
}

#[test]
fn test_identifiers_are_independent() {
    let (store, _clock) = store_with_clock();

    store.put("a@x.com", "111111", DeliveryMethod::Email, TTL_MINUTES);
    store.put("+14155550100", "222222", DeliveryMethod::Phone, TTL_MINUTES);

    assert_eq!(
        store.verify_and_consume("a@x.com", "111111"),
        VerifyOutcome::Verified
    );
    assert_eq!(
        store.verify_and_consume("+14155550100", "222222"),
        VerifyOutcome::Verified
    );
}
