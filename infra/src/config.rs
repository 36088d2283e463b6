//! Mail transport configuration

use std::env;
use std::time::Duration;

/// Placeholder values shipped in example .env files; treated as unset.
const PLACEHOLDER_USERNAME: &str = "your-email@example.com";
const PLACEHOLDER_PASSWORD: &str = "your-app-password";

/// SMTP transport settings, read from the environment.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP username (usually the sending address)
    pub smtp_username: String,
    /// SMTP password or app password
    pub smtp_password: String,
    /// From address shown to recipients
    pub from_address: String,
    /// Display name on outgoing mail
    pub from_name: String,
    /// Transport-level timeout
    pub timeout: Duration,
}

impl MailConfig {
    /// Read the mail configuration from environment variables.
    ///
    /// Missing values default to empty strings; [`MailConfig::is_configured`]
    /// decides whether the SMTP transport can actually be built.
    pub fn from_env() -> Self {
        let smtp_username = env::var("SMTP_USERNAME").unwrap_or_default();
        Self {
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            from_address: env::var("MAIL_FROM").unwrap_or_else(|_| smtp_username.clone()),
            from_name: env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "JobLink".to_string()),
            smtp_username,
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Whether real credentials are present (not empty, not placeholders).
    pub fn is_configured(&self) -> bool {
        !self.smtp_username.is_empty()
            && !self.smtp_password.is_empty()
            && self.smtp_username != PLACEHOLDER_USERNAME
            && self.smtp_password != PLACEHOLDER_PASSWORD
    }
}
