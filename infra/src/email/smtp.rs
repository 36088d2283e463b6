//! SMTP implementation of the OTP notifier

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use jl_core::services::otp::{mask_identifier, Notifier};

use crate::config::MailConfig;

/// Sends OTP emails over an authenticated STARTTLS relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, String> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| format!("invalid SMTP relay {}: {}", config.smtp_host, e))?
            .credentials(credentials)
            .timeout(Some(config.timeout))
            .build();

        let from: Mailbox = format!("{} <{}>", config.from_name, config.from_address)
            .parse()
            .map_err(|e| format!("invalid from address {}: {}", config.from_address, e))?;

        Ok(Self { transport, from })
    }

    fn build_message(&self, email: &str, code: &str) -> Result<Message, String> {
        let to: Mailbox = email
            .parse()
            .map_err(|e| format!("invalid recipient address: {}", e))?;

        let text_body = format!(
            "Your OTP code is: {}. This code is valid for 10 minutes.",
            code
        );
        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; padding: 20px; background-color: #f4f4f4;">
  <div style="max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px;">
    <h2 style="color: #333; text-align: center;">OTP Verification</h2>
    <p style="font-size: 16px; color: #666;">Your verification code is:</p>
    <div style="text-align: center; margin: 30px 0;">
      <span style="font-size: 32px; font-weight: bold; color: #2563eb; letter-spacing: 5px; padding: 10px 20px; border: 2px dashed #2563eb; border-radius: 5px;">{code}</span>
    </div>
    <p style="font-size: 14px; color: #888;">This code will expire in 10 minutes.</p>
    <p style="font-size: 12px; color: #ff0000;"><strong>Do not share this code with anyone.</strong></p>
  </div>
</div>"#
        );

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your OTP Verification Code")
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body),
                    ),
            )
            .map_err(|e| format!("failed to build message: {}", e))
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn send_otp_email(&self, email: &str, code: &str) -> Result<String, String> {
        let message = self.build_message(email, code)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("smtp send failed: {}", e))?;

        let message_id = response.message().collect::<Vec<_>>().join(" ");
        tracing::info!(
            recipient = %mask_identifier(email),
            response = %message_id,
            event = "email_sent",
            "OTP email accepted by relay"
        );
        Ok(message_id)
    }
}
