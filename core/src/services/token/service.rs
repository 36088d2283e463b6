//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::UserType;
use crate::errors::{DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Claims structure for the session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User role tag ("jobseeker" or "employer")
    pub user_type: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Unique token id
    pub jti: String,
}

/// Mints and verifies opaque bearer credentials.
///
/// A thin wrapper over HS256 JWT signing: the token binds a user identity and
/// a coarse role tag with a fixed validity window. Verification rejects
/// tampered and expired tokens.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issue a signed session token for a verified identity.
    pub fn issue_token(&self, user_id: Uuid, user_type: UserType) -> DomainResult<String> {
        let now = Utc::now();
        let expiry = now + Duration::days(self.config.token_expiry_days);

        let claims = Claims {
            sub: user_id.to_string(),
            user_type: match user_type {
                UserType::Jobseeker => "jobseeker".to_string(),
                UserType::Employer => "employer".to_string(),
            },
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Token generation failed: {}", e),
            }
        })
    }

    /// Decode and validate a session token, rejecting tampered or expired ones.
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::Validation {
                message: format!("Invalid token: {}", e),
            })
    }
}
