//! Main authentication service implementation

use std::sync::Arc;
use tracing;

use crate::domain::entities::user::{User, UserType};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::otp::mask_identifier;
use crate::services::token::TokenService;

/// Input for account creation.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub user_type: UserType,
}

/// A user together with their freshly minted session token.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub token: String,
}

/// Registration and login on top of the user repository and token service.
///
/// Callers are expected to have completed OTP verification for the identifier
/// before invoking either operation; this service does not re-check it.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: TokenService,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: Arc<U>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Create an account and mint its first session token.
    ///
    /// Requires a display name (name for job seekers, company for employers)
    /// and at least one identifier.
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AuthOutcome> {
        let has_display_name = match input.user_type {
            UserType::Employer => input.company.as_deref().is_some_and(|c| !c.is_empty()),
            UserType::Jobseeker => input.name.as_deref().is_some_and(|n| !n.is_empty()),
        };
        let identifier = input
            .email
            .clone()
            .filter(|e| !e.is_empty())
            .or_else(|| input.phone.clone().filter(|p| !p.is_empty()));

        let identifier = match (has_display_name, identifier) {
            (true, Some(identifier)) => identifier,
            _ => return Err(AuthError::MissingRegistrationFields.into()),
        };

        if self.users.exists_by_identifier(&identifier).await? {
            tracing::warn!(
                identifier = %mask_identifier(&identifier),
                event = "register_duplicate",
                "Registration rejected: identifier already taken"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = User::new(
            input.name,
            input.email.filter(|e| !e.is_empty()),
            input.phone.filter(|p| !p.is_empty()),
            input.user_type,
            input.company,
        );
        let user = self.users.create(user).await?;
        let token = self.tokens.issue_token(user.id, user.user_type)?;

        tracing::info!(
            user_id = %user.id,
            event = "user_registered",
            "Registered new user"
        );

        Ok(AuthOutcome { user, token })
    }

    /// Authenticate an existing identifier and mint a session token.
    pub async fn login(&self, identifier: &str) -> DomainResult<AuthOutcome> {
        if identifier.is_empty() {
            return Err(AuthError::MissingLoginIdentifier.into());
        }

        let user = self
            .users
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        let token = self.tokens.issue_token(user.id, user.user_type)?;

        tracing::info!(
            user_id = %user.id,
            event = "user_login",
            "Issued session token"
        );

        Ok(AuthOutcome { user, token })
    }

    /// Number of registered users (diagnostics).
    pub async fn user_count(&self) -> DomainResult<usize> {
        self.users.count().await
    }
}
