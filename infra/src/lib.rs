//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository and hashing traits:
//!
//! - **Database**: MySQL connection pool, schema migrations and repositories using SQLx
//! - **Password**: bcrypt hashing run on the blocking thread pool
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use sf_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Password hashing implementations
pub mod password;

pub use password::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::internal(error.to_string())
    }
}
