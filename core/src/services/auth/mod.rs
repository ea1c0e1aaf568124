//! Authentication service module
//!
//! Username/password registration and login, profile lookup and
//! out-of-band admin provisioning. Password hashing is delegated to a
//! [`PasswordHasherTrait`] implementation supplied by the infrastructure
//! layer.

mod config;
mod password;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::PasswordHasherTrait;
pub use service::AuthService;
pub use validation::{validate_password, validate_username, MAX_USERNAME_LENGTH};
