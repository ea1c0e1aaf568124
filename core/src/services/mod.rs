//! Business services containing domain logic and use cases.

pub mod auth;
pub mod order;
pub mod payment;
pub mod product;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, PasswordHasherTrait};
pub use order::OrderService;
pub use payment::{check_card, CardCheck};
pub use product::ProductService;
pub use token::{TokenService, TokenServiceConfig};
