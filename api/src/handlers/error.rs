//! Mapping from domain errors to HTTP responses.
//!
//! Every failure becomes a `{success: false, error}` payload; internal
//! details are never exposed to the caller.

use actix_web::HttpResponse;
use serde::Serialize;

use jl_core::errors::{AuthError, DomainError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Convert a domain error into the wire response.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{} not found", resource)))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let body = ErrorBody::new(error.to_string());
    match error {
        AuthError::UserAlreadyExists => HttpResponse::Conflict().json(body),
        AuthError::UserNotFound => HttpResponse::NotFound().json(body),
        AuthError::MissingIdentifier
        | AuthError::MissingLoginIdentifier
        | AuthError::MissingCode
        | AuthError::MissingRegistrationFields
        | AuthError::OtpNotFound
        | AuthError::OtpMismatch => HttpResponse::BadRequest().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AuthError::MissingIdentifier, StatusCode::BAD_REQUEST),
            (AuthError::MissingLoginIdentifier, StatusCode::BAD_REQUEST),
            (AuthError::OtpNotFound, StatusCode::BAD_REQUEST),
            (AuthError::OtpMismatch, StatusCode::BAD_REQUEST),
            (AuthError::UserAlreadyExists, StatusCode::CONFLICT),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
        ];
        for (error, expected) in cases {
            let response = domain_error_response(&DomainError::Auth(error));
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_error_is_not_leaked() {
        let response = domain_error_response(&DomainError::Internal {
            message: "secret pool state".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
