//! Notifier trait for OTP delivery

use async_trait::async_trait;

/// Delivery collaborator for one-time passcodes.
///
/// Returns a provider message id on success. Errors are reported as plain
/// strings; the OTP service treats any failure as non-fatal and the issued
/// code stays valid.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `code` to `email`.
    async fn send_otp_email(&self, email: &str, code: &str) -> Result<String, String>;
}

#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn send_otp_email(&self, email: &str, code: &str) -> Result<String, String> {
        (**self).send_otp_email(email, code).await
    }
}
