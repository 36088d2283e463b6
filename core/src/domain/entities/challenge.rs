//! Challenge entity: one outstanding OTP issued for an identifier.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Minutes a challenge stays valid after issuance
pub const CODE_EXPIRATION_MINUTES: i64 = 10;

/// How a challenge is delivered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Delivered by email through the notifier
    Email,
    /// Generated only; no delivery channel is wired for phone
    Phone,
}

/// One outstanding OTP challenge.
///
/// Immutable once stored: a new `send` for the same identifier replaces the
/// whole entry rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Email or phone the code was issued for; unique key within the store
    pub identifier: String,

    /// The 6-digit numeric code, leading zeros allowed
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer valid
    pub expires_at: DateTime<Utc>,

    /// Channel the code was (to be) delivered over
    pub delivery_method: DeliveryMethod,
}

impl Challenge {
    /// Creates a challenge issued at `now`, expiring `expiration_minutes` later.
    pub fn new(
        identifier: String,
        code: String,
        delivery_method: DeliveryMethod,
        now: DateTime<Utc>,
        expiration_minutes: i64,
    ) -> Self {
        Self {
            identifier,
            code,
            issued_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            delivery_method,
        }
    }

    /// Whether the challenge has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Time remaining until expiry, or zero if already expired.
    pub fn time_until_expiration(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge_at(now: DateTime<Utc>) -> Challenge {
        Challenge::new(
            "a@x.com".to_string(),
            "042137".to_string(),
            DeliveryMethod::Email,
            now,
            CODE_EXPIRATION_MINUTES,
        )
    }

    #[test]
    fn test_new_challenge_window() {
        let now = Utc::now();
        let challenge = challenge_at(now);

        assert_eq!(challenge.identifier, "a@x.com");
        assert_eq!(challenge.code.len(), CODE_LENGTH);
        assert_eq!(challenge.issued_at, now);
        assert_eq!(
            challenge.expires_at,
            now + Duration::minutes(CODE_EXPIRATION_MINUTES)
        );
        assert!(!challenge.is_expired(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let challenge = challenge_at(now);

        // Still valid exactly at expires_at, expired one second past it
        assert!(!challenge.is_expired(challenge.expires_at));
        assert!(challenge.is_expired(challenge.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_time_until_expiration() {
        let now = Utc::now();
        let challenge = challenge_at(now);

        assert_eq!(
            challenge.time_until_expiration(now),
            Duration::minutes(CODE_EXPIRATION_MINUTES)
        );
        assert_eq!(
            challenge.time_until_expiration(now + Duration::minutes(30)),
            Duration::zero()
        );
    }

    #[test]
    fn test_serialization() {
        let challenge = challenge_at(Utc::now());

        let json = serde_json::to_string(&challenge).unwrap();
        let deserialized: Challenge = serde_json::from_str(&json).unwrap();

        assert_eq!(challenge, deserialized);
    }
}
