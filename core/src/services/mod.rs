//! Business services containing domain logic and use cases.

pub mod auth;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, RegisterInput};
pub use otp::{
    mask_identifier, CredentialStore, Notifier, OtpService, OtpServiceConfig, SendOtpOutcome,
    VerifyOutcome,
};
pub use token::{Claims, TokenService, TokenServiceConfig};
