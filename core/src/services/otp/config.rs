//! Configuration for the OTP service

use crate::domain::entities::challenge::CODE_EXPIRATION_MINUTES;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Minutes before an issued code expires
    pub code_expiration_minutes: i64,
    /// Upper bound on a single notifier delivery attempt, in seconds
    pub delivery_timeout_secs: u64,
    /// Whether the generated code is surfaced in the send response.
    ///
    /// On by default so existing clients keep working. This is an
    /// operability/testing trade-off, not a security best practice: anyone
    /// who can read the response can log in as the identifier.
    pub expose_code_in_response: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: CODE_EXPIRATION_MINUTES,
            delivery_timeout_secs: 10,
            expose_code_in_response: true,
        }
    }
}
