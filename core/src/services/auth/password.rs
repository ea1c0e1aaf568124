use async_trait::async_trait;

use crate::errors::DomainError;

/// Password hashing collaborator
///
/// Implementations are expected to be slow on purpose; callers await them
/// so that the work can be moved off the request thread.
#[async_trait]
pub trait PasswordHasherTrait: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Returns `Ok(false)` on mismatch; `Err` only on malformed hashes or executor failure
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
