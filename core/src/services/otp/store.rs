//! Credential store: authoritative holder of outstanding challenges.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use constant_time_eq::constant_time_eq;

use crate::domain::entities::challenge::{Challenge, DeliveryMethod};

use super::clock::Clock;

/// Outcome of an atomic verify-and-consume check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Code matched; the challenge has been removed
    Verified,
    /// No live challenge for the identifier (never issued, or expired)
    NotFound,
    /// A live challenge exists but the code differs; it stays live
    Mismatch,
}

/// In-memory map of outstanding challenges keyed by identifier.
///
/// All operations take the single entry lock, so a challenge observed by one
/// verify call cannot be observed by a concurrent one after it matched:
/// exactly one verify succeeds per issued code. Expiry is lazy; the periodic
/// sweep only bounds memory.
pub struct CredentialStore {
    entries: Mutex<HashMap<String, Challenge>>,
    clock: Arc<dyn Clock>,
}

impl CredentialStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Inserts or silently overwrites the challenge for `identifier`.
    ///
    /// Any prior code for the identifier becomes permanently invalid. No
    /// identifier format validation happens here; that is the caller's job.
    pub fn put(
        &self,
        identifier: &str,
        code: &str,
        delivery_method: DeliveryMethod,
        expiration_minutes: i64,
    ) -> Challenge {
        let challenge = Challenge::new(
            identifier.to_string(),
            code.to_string(),
            delivery_method,
            self.clock.now(),
            expiration_minutes,
        );
        let mut entries = self.entries.lock().unwrap();
        entries.insert(identifier.to_string(), challenge.clone());
        challenge
    }

    /// Returns the live challenge for `identifier`, if any.
    ///
    /// An entry past its expiry is evicted and reported absent.
    pub fn get(&self, identifier: &str) -> Option<Challenge> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();
        match entries.get(identifier) {
            Some(challenge) if challenge.is_expired(now) => {
                entries.remove(identifier);
                None
            }
            Some(challenge) => Some(challenge.clone()),
            None => None,
        }
    }

    /// Removes the challenge for `identifier`. Idempotent.
    pub fn consume(&self, identifier: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(identifier);
    }

    /// Checks `code` against the live challenge and consumes it on match.
    ///
    /// Lookup, lazy expiry, comparison and removal happen under one lock
    /// guard. The comparison is constant-time. A mismatch leaves the
    /// challenge live so the user may retry until it expires or is replaced.
    pub fn verify_and_consume(&self, identifier: &str, code: &str) -> VerifyOutcome {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();

        let challenge = match entries.get(identifier) {
            Some(challenge) => challenge,
            None => return VerifyOutcome::NotFound,
        };

        if challenge.is_expired(now) {
            entries.remove(identifier);
            return VerifyOutcome::NotFound;
        }

        let matches = challenge.code.len() == code.len()
            && constant_time_eq(challenge.code.as_bytes(), code.as_bytes());
        if matches {
            entries.remove(identifier);
            VerifyOutcome::Verified
        } else {
            VerifyOutcome::Mismatch
        }
    }

    /// Removes every expired challenge and returns how many were dropped.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|_, challenge| !challenge.is_expired(now));
        before - entries.len()
    }

    /// Number of stored challenges, expired entries included until swept.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
