//! OTP service module: the send / verify / expiry workflow.
//!
//! This module provides the full one-time-passcode lifecycle:
//! - code generation and delivery through a pluggable [`Notifier`]
//! - the in-memory [`CredentialStore`] with lazy expiry and a periodic sweep
//! - single-use verification (a matched code is consumed immediately)

mod clock;
mod config;
mod service;
mod store;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::OtpServiceConfig;
pub use service::{mask_identifier, OtpService};
pub use store::{CredentialStore, VerifyOutcome};
pub use traits::Notifier;
pub use types::SendOtpOutcome;
