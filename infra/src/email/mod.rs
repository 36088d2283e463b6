//! Email delivery module
//!
//! Implementations of the core `Notifier` trait:
//!
//! - **SMTP**: production delivery over a configured relay
//! - **Mock**: console/log output for development and tests
//!
//! Missing or placeholder credentials never block OTP issuance: the factory
//! falls back to the mock, which surfaces the code in the server log.

mod mock;
mod smtp;

pub use mock::MockMailer;
pub use smtp::SmtpMailer;

use jl_core::services::otp::Notifier;

use crate::config::MailConfig;

/// Create a mailer from configuration, falling back to the mock when no
/// usable SMTP credentials are present or the transport cannot be built.
pub fn create_mailer(config: &MailConfig) -> Box<dyn Notifier> {
    if !config.is_configured() {
        tracing::warn!(
            "SMTP credentials missing or placeholders; using mock mailer (codes logged server-side)"
        );
        return Box::new(MockMailer::new());
    }

    match SmtpMailer::new(config) {
        Ok(mailer) => {
            tracing::info!(host = %config.smtp_host, "Using SMTP mailer");
            Box::new(mailer)
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to initialize SMTP mailer");
            tracing::warn!("Falling back to mock mailer");
            Box::new(MockMailer::new())
        }
    }
}
