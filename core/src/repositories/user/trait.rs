//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first so that both the MySQL implementation in the
//! infrastructure crate and the in-memory implementation below can back
//! the same services.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by login name (exact, case-sensitive match)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Username taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check if a username is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
}
