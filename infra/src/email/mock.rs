//! Mock mailer for development and testing
//!
//! Logs OTP emails instead of sending them, so issuance keeps working with
//! no mail transport configured. The operator reads the code from the log.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use jl_core::services::otp::{mask_identifier, Notifier};

/// Mailer that records to the log and counts messages.
#[derive(Clone, Default)]
pub struct MockMailer {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every send, for exercising the fail-open
    /// delivery path.
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total messages accepted by this mock.
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for MockMailer {
    async fn send_otp_email(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                recipient = %mask_identifier(email),
                "Mock mailer simulating delivery failure"
            );
            return Err("simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %mask_identifier(email),
            message_id = %message_id,
            message_number = count,
            code = %code,
            "MOCK EMAIL - OTP code (not delivered)"
        );

        Ok(message_id)
    }
}
