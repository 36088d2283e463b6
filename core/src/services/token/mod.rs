//! Session issuer: signed bearer tokens minted after OTP verification.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::{Claims, TokenService};
