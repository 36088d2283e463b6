//! # JobLink Infrastructure
//!
//! Email delivery implementations behind the core [`Notifier`] trait:
//! an SMTP mailer for real deployments and a console mock that keeps OTP
//! issuance working when no mail transport is configured.
//!
//! [`Notifier`]: jl_core::services::otp::Notifier

pub mod config;
pub mod email;

pub use config::MailConfig;
pub use email::{create_mailer, MockMailer, SmtpMailer};
