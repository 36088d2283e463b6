use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;

use jl_core::repositories::InMemoryUserRepository;
use jl_core::services::auth::AuthService;
use jl_core::services::otp::{Notifier, OtpService, OtpServiceConfig, SystemClock};
use jl_core::services::token::{TokenService, TokenServiceConfig};
use jl_infra::{create_mailer, MailConfig};

mod config;
mod dto;
mod handlers;
mod middleware;
mod routes;

use config::ServerConfig;
use routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting JobLink API server");

    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    // Mail transport: falls back to the logging mock when SMTP credentials
    // are absent, so OTP issuance keeps working.
    let mail_config = MailConfig::from_env();
    let mailer: Arc<Box<dyn Notifier>> = Arc::new(create_mailer(&mail_config));

    let otp_service = Arc::new(OtpService::new(
        mailer,
        Arc::new(SystemClock),
        OtpServiceConfig::default(),
    ));

    let users = Arc::new(InMemoryUserRepository::new());
    let auth_service = Arc::new(AuthService::new(
        users,
        TokenService::new(TokenServiceConfig {
            jwt_secret: server_config.jwt_secret.clone(),
            ..TokenServiceConfig::default()
        }),
    ));

    let state = web::Data::new(AppState {
        otp_service: otp_service.clone(),
        auth_service,
    });

    // Periodic sweep bounds the credential store's memory; verification
    // correctness never depends on it running promptly.
    let sweeper = spawn_sweeper(otp_service, server_config.sweep_interval_secs);

    info!("Server binding to {}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(routes::configure::<Box<dyn Notifier>, InMemoryUserRepository>)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "success": false,
                    "error": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await;

    // No dangling timer past server shutdown
    sweeper.abort();
    server
}

fn spawn_sweeper(
    otp_service: Arc<OtpService<Box<dyn Notifier>>>,
    interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        // The first tick completes immediately; skip it so sweeps start one
        // full interval after boot.
        interval.tick().await;
        loop {
            interval.tick().await;
            otp_service.sweep_expired();
        }
    })
}
