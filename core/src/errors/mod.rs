//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication and OTP errors surfaced to API callers.
///
/// Every variant maps to a stable machine-distinguishable kind; the display
/// strings are the exact messages returned over the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email or phone is required")]
    MissingIdentifier,

    /// Login-specific wording; deployed clients match on the exact string.
    #[error("Email or phone required")]
    MissingLoginIdentifier,

    #[error("OTP is required")]
    MissingCode,

    /// Covers both "never issued" and "expired" so callers cannot tell
    /// which case occurred.
    #[error("OTP not found. Please request a new one.")]
    OtpNotFound,

    #[error("Invalid OTP")]
    OtpMismatch,

    #[error("Missing required fields")]
    MissingRegistrationFields,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,
}

impl AuthError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingIdentifier => "MISSING_IDENTIFIER",
            AuthError::MissingLoginIdentifier => "MISSING_LOGIN_IDENTIFIER",
            AuthError::MissingCode => "MISSING_CODE",
            AuthError::OtpNotFound => "OTP_NOT_FOUND",
            AuthError::OtpMismatch => "OTP_MISMATCH",
            AuthError::MissingRegistrationFields => "MISSING_REGISTRATION_FIELDS",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::UserNotFound => "USER_NOT_FOUND",
        }
    }
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;
