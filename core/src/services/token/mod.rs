//! Token service module for JWT management
//!
//! Issues HS256 access tokens for authenticated users and resolves
//! presented tokens back into a [`Caller`](crate::domain::value_objects::Caller).

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
