//! Configuration for the token service

/// Days a session token stays valid
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,
    /// Token expiry in days
    pub token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_expiry_days: TOKEN_EXPIRY_DAYS,
        }
    }
}
