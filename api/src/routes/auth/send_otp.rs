//! Handler for POST /api/send-otp

use actix_web::{web, HttpResponse};

use jl_core::domain::entities::challenge::DeliveryMethod;
use jl_core::errors::AuthError;
use jl_core::repositories::UserRepository;
use jl_core::services::otp::{mask_identifier, Notifier};

use crate::dto::auth::{pick_identifier, SendOtpRequest, SendOtpResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Issues a one-time passcode for the supplied email or phone.
///
/// Email delivery failure does not fail the request: the code stays valid
/// and the response reports `emailSent: false`.
pub async fn send_otp<N, U>(
    state: web::Data<AppState<N, U>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let identifier = match pick_identifier(&request.email, &request.phone) {
        Some(identifier) => identifier,
        None => return domain_error_response(&AuthError::MissingIdentifier.into()),
    };

    let by_email = request.email.as_deref().is_some_and(|e| !e.is_empty());
    let delivery_method = if by_email {
        DeliveryMethod::Email
    } else {
        DeliveryMethod::Phone
    };

    log::info!(
        "send-otp request for {} via {:?}",
        mask_identifier(&identifier),
        delivery_method
    );

    match state.otp_service.send(&identifier, delivery_method).await {
        Ok(outcome) => {
            let message = if by_email {
                "OTP sent successfully"
            } else {
                "OTP generated"
            };
            let otp = state
                .otp_service
                .exposes_code_in_response()
                .then(|| outcome.challenge.code.clone());

            HttpResponse::Ok().json(SendOtpResponse {
                success: true,
                message: message.to_string(),
                otp,
                email_sent: outcome.delivered,
                identifier,
            })
        }
        Err(error) => domain_error_response(&error),
    }
}
