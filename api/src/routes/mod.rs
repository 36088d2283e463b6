//! Route registration for the JobLink API.

pub mod auth;
pub mod health;
pub mod test_email;

use actix_web::web;

use jl_core::repositories::UserRepository;
use jl_core::services::otp::Notifier;

/// Register all `/api` routes on the app.
pub fn configure<N, U>(cfg: &mut web::ServiceConfig)
where
    N: Notifier + 'static,
    U: UserRepository + 'static,
{
    cfg.service(
        web::scope("/api")
            .route("/send-otp", web::post().to(auth::send_otp::send_otp::<N, U>))
            .route(
                "/verify-otp",
                web::post().to(auth::verify_otp::verify_otp::<N, U>),
            )
            .route("/register", web::post().to(auth::register::register::<N, U>))
            .route("/login", web::post().to(auth::login::login::<N, U>))
            .route("/health", web::get().to(health::health::<N, U>))
            .route(
                "/test-email",
                web::get().to(test_email::test_email::<N, U>),
            ),
    );
}
