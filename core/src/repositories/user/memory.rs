//! In-memory implementation of [`UserRepository`].
//!
//! This is the production store: JobLink deliberately keeps user records in
//! process memory, so losing the process loses the accounts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::repository::UserRepository;

/// In-memory user repository backed by a `HashMap` keyed by user id.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.matches_identifier(identifier))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_identifier(&self, identifier: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.matches_identifier(identifier)))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let duplicate = users.values().any(|existing| {
            user.email
                .as_deref()
                .is_some_and(|e| existing.matches_identifier(e))
                || user
                    .phone
                    .as_deref()
                    .is_some_and(|p| existing.matches_identifier(p))
        });
        if duplicate {
            return Err(AuthError::UserAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
