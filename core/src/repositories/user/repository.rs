//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for [`User`] entities.
///
/// Users are looked up by identifier: an email address or phone number, the
/// same value an OTP challenge is keyed by.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user whose email or phone equals `identifier`.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Whether any user matches `identifier`.
    async fn exists_by_identifier(&self, identifier: &str) -> Result<bool, DomainError>;

    /// Persist a new user. Fails if the identifier is already taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Number of registered users (diagnostics).
    async fn count(&self) -> Result<usize, DomainError>;
}
