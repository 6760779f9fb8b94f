//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, PersistedUser, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<PersistedUser>, DomainError>;

    /// Get a user by exact email
    async fn get_by_email(&self, email: &str) -> Result<Option<PersistedUser>, DomainError>;

    /// Insert a new user. A second row with the same email is a conflict.
    async fn create(&self, user: NewUser) -> Result<PersistedUser, DomainError>;

    /// List all users, most recently registered first
    async fn list(&self) -> Result<Vec<PersistedUser>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
