//! Mail-transport diagnostic endpoint

use std::env;

use actix_web::{web, HttpResponse};

use jl_core::repositories::UserRepository;
use jl_core::services::otp::{mask_identifier, Notifier};

use crate::dto::auth::TestEmailResponse;
use crate::routes::auth::AppState;

/// Handler for GET /api/test-email
///
/// Sends a throwaway code through the configured notifier so an operator can
/// check SMTP settings without touching the credential store.
pub async fn test_email<N, U>(state: web::Data<AppState<N, U>>) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let recipient = env::var("MAIL_FROM")
        .or_else(|_| env::var("SMTP_USERNAME"))
        .unwrap_or_else(|_| "test@example.com".to_string());

    log::info!("test-email requested for {}", mask_identifier(&recipient));

    let (code, delivered, _message_id) = state.otp_service.send_test_email(&recipient).await;
    let message = if delivered {
        "Email test successful"
    } else {
        "Email test failed"
    };

    HttpResponse::Ok().json(TestEmailResponse {
        success: true,
        email_sent: delivered,
        message: message.to_string(),
        test_email: recipient,
        otp: state
            .otp_service
            .exposes_code_in_response()
            .then_some(code),
    })
}
