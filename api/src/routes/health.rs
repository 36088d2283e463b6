//! Liveness/diagnostic endpoint

use actix_web::{web, HttpResponse};
use chrono::Utc;

use jl_core::repositories::UserRepository;
use jl_core::services::otp::Notifier;

use crate::dto::auth::HealthResponse;
use crate::handlers::error::domain_error_response;
use crate::routes::auth::AppState;

/// Handler for GET /api/health
pub async fn health<N, U>(state: web::Data<AppState<N, U>>) -> HttpResponse
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    let users_count = match state.auth_service.user_count().await {
        Ok(count) => count,
        Err(error) => return domain_error_response(&error),
    };

    HttpResponse::Ok().json(HealthResponse {
        success: true,
        status: "OK".to_string(),
        timestamp: Utc::now(),
        database: "in-memory".to_string(),
        users_count,
        otp_count: state.otp_service.outstanding_codes(),
    })
}
