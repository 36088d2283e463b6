//! Request and response shapes for the auth endpoints.
//!
//! Field names are wire-compatible with the deployed JobLink clients
//! (`emailSent`, `userType`, `usersCount`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jl_core::domain::entities::user::{User, UserType};

#[derive(Debug, Clone, Deserialize)]
pub struct SendOtpRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    /// The generated code, surfaced for operability/testing when
    /// `expose_code_in_response` is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
    pub identifier: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "userType", default)]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthSuccessResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestEmailResponse {
    pub success: bool,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
    pub message: String,
    #[serde(rename = "testEmail")]
    pub test_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
    #[serde(rename = "usersCount")]
    pub users_count: usize,
    #[serde(rename = "otpCount")]
    pub otp_count: usize,
}

/// Picks the identifier the way the clients expect: email wins
/// over phone, empty strings count as absent.
pub fn pick_identifier(email: &Option<String>, phone: &Option<String>) -> Option<String> {
    email
        .clone()
        .filter(|e| !e.is_empty())
        .or_else(|| phone.clone().filter(|p| !p.is_empty()))
}
