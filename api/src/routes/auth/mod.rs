pub mod login;
pub mod register;
pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use jl_core::repositories::UserRepository;
use jl_core::services::auth::AuthService;
use jl_core::services::otp::{Notifier, OtpService};

/// Application state that holds the shared services.
pub struct AppState<N, U>
where
    N: Notifier,
    U: UserRepository,
{
    pub otp_service: Arc<OtpService<N>>,
    pub auth_service: Arc<AuthService<U>>,
}
