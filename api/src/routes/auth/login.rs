//! Handler for POST /api/login

use actix_web::{web, HttpResponse};

use jl_core::errors::AuthError;
use jl_core::repositories::UserRepository;
use jl_core::services::otp::{mask_identifier, Notifier};

use crate::dto::auth::{pick_identifier, AuthSuccessResponse, LoginRequest};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Authenticates an existing identifier and returns a session token.
pub async fn login<N, U>(
    state: web::Data<AppState<N, U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let identifier = match pick_identifier(&request.email, &request.phone) {
        Some(identifier) => identifier,
        None => return domain_error_response(&AuthError::MissingLoginIdentifier.into()),
    };

    log::info!("login request for {}", mask_identifier(&identifier));

    match state.auth_service.login(&identifier).await {
        Ok(outcome) => HttpResponse::Ok().json(AuthSuccessResponse {
            success: true,
            message: "Login successful".to_string(),
            user: outcome.user,
            token: outcome.token,
        }),
        Err(error) => domain_error_response(&error),
    }
}
