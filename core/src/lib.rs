//! # Storefront Core
//!
//! Core business logic and domain layer for the Storefront backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AuthResponse, Caller, Claims, NewProduct, Order, OrderDetails, OrderStatus, Product, Role,
    User, UserProfile,
};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemoryUserRepository, OrderFilter,
    OrderRepository, ProductRepository, UserRepository,
};
pub use services::{
    check_card, AuthService, AuthServiceConfig, CardCheck, OrderService, PasswordHasherTrait,
    ProductService, TokenService, TokenServiceConfig,
};
