//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{
    Claims, NewProduct, Order, OrderDetails, OrderStatus, Product, Role, User,
    CARD_SUFFIX_LENGTH, JWT_AUDIENCE, JWT_ISSUER,
};
pub use value_objects::{AuthResponse, Caller, UserProfile};
