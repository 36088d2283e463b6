//! Main OTP service implementation

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing;

use crate::domain::entities::challenge::DeliveryMethod;
use crate::errors::{AuthError, DomainResult};

use super::clock::Clock;
use super::config::OtpServiceConfig;
use super::store::{CredentialStore, VerifyOutcome};
use super::traits::Notifier;
use super::types::SendOtpOutcome;

/// OTP service: issues codes, hands them to the notifier, verifies them.
pub struct OtpService<N: Notifier> {
    notifier: Arc<N>,
    store: CredentialStore,
    config: OtpServiceConfig,
}

impl<N: Notifier> OtpService<N> {
    pub fn new(notifier: Arc<N>, clock: Arc<dyn Clock>, config: OtpServiceConfig) -> Self {
        Self {
            notifier,
            store: CredentialStore::new(clock),
            config,
        }
    }

    /// Issue a fresh code for `identifier` and attempt delivery.
    ///
    /// Delivery is fail-open: a notifier error or timeout leaves the code
    /// valid and is reported as `delivered: false`, with the code logged
    /// server-side as the fallback channel. Only an empty identifier is an
    /// error.
    pub async fn send(
        &self,
        identifier: &str,
        delivery_method: DeliveryMethod,
    ) -> DomainResult<SendOtpOutcome> {
        if identifier.is_empty() {
            return Err(AuthError::MissingIdentifier.into());
        }

        let code = Self::generate_code();
        let challenge = self.store.put(
            identifier,
            &code,
            delivery_method,
            self.config.code_expiration_minutes,
        );

        tracing::info!(
            identifier = %mask_identifier(identifier),
            event = "otp_issued",
            expires_at = %challenge.expires_at,
            "Issued new one-time passcode"
        );

        let (delivered, message_id) = match delivery_method {
            DeliveryMethod::Email => self.deliver(identifier, &code).await,
            // No delivery channel is wired for phone; the code is only
            // surfaced through the response and the server log.
            DeliveryMethod::Phone => (true, None),
        };

        Ok(SendOtpOutcome {
            challenge,
            delivered,
            message_id,
        })
    }

    /// Check `code` against the live challenge for `identifier`.
    ///
    /// Verification is fail-closed and exactly-once: a matched challenge is
    /// consumed immediately, so replaying the same code fails with
    /// [`AuthError::OtpNotFound`]. A mismatch does not consume; there is
    /// deliberately no attempt counter.
    pub fn verify(&self, identifier: &str, code: &str) -> DomainResult<()> {
        if identifier.is_empty() {
            return Err(AuthError::MissingIdentifier.into());
        }
        if code.is_empty() {
            return Err(AuthError::MissingCode.into());
        }

        match self.store.verify_and_consume(identifier, code) {
            VerifyOutcome::Verified => {
                tracing::info!(
                    identifier = %mask_identifier(identifier),
                    event = "otp_verified",
                    "One-time passcode verified and consumed"
                );
                Ok(())
            }
            VerifyOutcome::NotFound => {
                tracing::warn!(
                    identifier = %mask_identifier(identifier),
                    event = "otp_not_found",
                    "No live passcode for identifier"
                );
                Err(AuthError::OtpNotFound.into())
            }
            VerifyOutcome::Mismatch => {
                tracing::warn!(
                    identifier = %mask_identifier(identifier),
                    event = "otp_mismatch",
                    "Submitted passcode does not match"
                );
                Err(AuthError::OtpMismatch.into())
            }
        }
    }

    /// Exercise the delivery channel with a throwaway code.
    ///
    /// The code is never stored, so it cannot be verified; this only reports
    /// whether the notifier accepted the message.
    pub async fn send_test_email(&self, recipient: &str) -> (String, bool, Option<String>) {
        let code = Self::generate_code();
        let (delivered, message_id) = self.deliver(recipient, &code).await;
        (code, delivered, message_id)
    }

    /// Drop expired challenges; returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let removed = self.store.sweep_expired();
        if removed > 0 {
            tracing::info!(removed, event = "otp_sweep", "Cleaned expired passcodes");
        }
        removed
    }

    /// Number of outstanding challenges (diagnostics).
    pub fn outstanding_codes(&self) -> usize {
        self.store.len()
    }

    /// Whether send responses should carry the generated code.
    pub fn exposes_code_in_response(&self) -> bool {
        self.config.expose_code_in_response
    }

    async fn deliver(&self, email: &str, code: &str) -> (bool, Option<String>) {
        let timeout = Duration::from_secs(self.config.delivery_timeout_secs);
        let attempt = tokio::time::timeout(timeout, self.notifier.send_otp_email(email, code));

        match attempt.await {
            Ok(Ok(message_id)) => {
                tracing::info!(
                    identifier = %mask_identifier(email),
                    message_id = %message_id,
                    event = "otp_delivered",
                    "Passcode email accepted by transport"
                );
                (true, Some(message_id))
            }
            Ok(Err(error)) => {
                tracing::warn!(
                    identifier = %mask_identifier(email),
                    error = %error,
                    event = "otp_delivery_failed",
                    "Passcode email failed; code remains valid"
                );
                // Fallback channel: the operator can read the code from the log.
                tracing::info!(
                    identifier = %mask_identifier(email),
                    code = %code,
                    "OTP available server-side after delivery failure"
                );
                (false, None)
            }
            Err(_) => {
                tracing::warn!(
                    identifier = %mask_identifier(email),
                    timeout_secs = self.config.delivery_timeout_secs,
                    event = "otp_delivery_timeout",
                    "Passcode email timed out; code remains valid"
                );
                tracing::info!(
                    identifier = %mask_identifier(email),
                    code = %code,
                    "OTP available server-side after delivery timeout"
                );
                (false, None)
            }
        }
    }

    /// Generate a uniformly random 6-digit code, leading zeros allowed.
    ///
    /// Uses the OS CSPRNG via rejection sampling so every code is equally
    /// likely.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        loop {
            let mut bytes = [0u8; 4];
            rng.fill_bytes(&mut bytes);
            let num = u32::from_le_bytes(bytes);
            // Reject the tail that would bias the modulo
            if num < (u32::MAX / 1_000_000) * 1_000_000 {
                return format!("{:06}", num % 1_000_000);
            }
        }
    }
}

/// Mask an identifier for logs: keep a short prefix, hide the rest.
///
/// `ada@example.com` becomes `ad***@example.com`, `+14155550100` becomes
/// `+1415***0100`.
pub fn mask_identifier(identifier: &str) -> String {
    if let Some((local, domain)) = identifier.split_once('@') {
        let visible: String = local.chars().take(2).collect();
        return format!("{visible}***@{domain}");
    }
    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() > 9 {
        let head: String = chars[..5].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        return format!("{head}***{tail}");
    }
    "***".to_string()
}
