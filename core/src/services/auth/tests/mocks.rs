//! Test doubles for the authentication service

use async_trait::async_trait;

use crate::errors::DomainError;
use crate::services::auth::PasswordHasherTrait;

/// Reversible "hash" so tests stay fast and deterministic
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasherTrait for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain${}", password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("plain${}", password))
    }
}
