//! Types for OTP service results

use crate::domain::entities::challenge::Challenge;

/// Result of issuing a one-time passcode.
#[derive(Debug, Clone)]
pub struct SendOtpOutcome {
    /// The challenge that is now live for the identifier
    pub challenge: Challenge,
    /// Whether the notifier reported successful delivery
    pub delivered: bool,
    /// Provider message id, when delivery succeeded
    pub message_id: Option<String>,
}
