//! Handler for POST /api/verify-otp

use actix_web::{web, HttpResponse};

use jl_core::errors::AuthError;
use jl_core::repositories::UserRepository;
use jl_core::services::otp::{mask_identifier, Notifier};

use crate::dto::auth::{pick_identifier, VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Checks a submitted code against the live challenge for the identifier.
///
/// A matched code is consumed: repeating the call fails with "OTP not
/// found". Expired and never-issued challenges are indistinguishable.
pub async fn verify_otp<N, U>(
    state: web::Data<AppState<N, U>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let otp = match request.otp.as_deref().filter(|o| !o.is_empty()) {
        Some(otp) => otp,
        None => return domain_error_response(&AuthError::MissingCode.into()),
    };
    let identifier = match pick_identifier(&request.email, &request.phone) {
        Some(identifier) => identifier,
        None => return domain_error_response(&AuthError::MissingIdentifier.into()),
    };

    log::info!("verify-otp request for {}", mask_identifier(&identifier));

    match state.otp_service.verify(&identifier, otp) {
        Ok(()) => HttpResponse::Ok().json(VerifyOtpResponse {
            success: true,
            message: "OTP verified successfully".to_string(),
        }),
        Err(error) => domain_error_response(&error),
    }
}
