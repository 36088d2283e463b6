//! Handler for POST /api/register

use actix_web::{web, HttpResponse};

use jl_core::repositories::UserRepository;
use jl_core::services::auth::RegisterInput;
use jl_core::services::otp::Notifier;

use crate::dto::auth::{AuthSuccessResponse, RegisterRequest};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Creates an account and returns its first session token.
///
/// Runs downstream of OTP verification in the client flow; the handler
/// itself only enforces field presence and identifier uniqueness.
pub async fn register<N, U>(
    state: web::Data<AppState<N, U>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    let input = RegisterInput {
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
        user_type: request.user_type,
    };

    match state.auth_service.register(input).await {
        Ok(outcome) => HttpResponse::Ok().json(AuthSuccessResponse {
            success: true,
            message: "Registration successful".to_string(),
            user: outcome.user,
            token: outcome.token,
        }),
        Err(error) => domain_error_response(&error),
    }
}
