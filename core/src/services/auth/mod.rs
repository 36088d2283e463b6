//! Authentication service: registration and login downstream of OTP
//! verification.

mod service;

pub use service::{AuthOutcome, AuthService, RegisterInput};
