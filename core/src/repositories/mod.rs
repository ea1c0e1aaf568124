//! Repository traits and in-memory implementations.

pub mod order;
pub mod product;
pub mod user;

pub use order::{InMemoryOrderRepository, OrderFilter, OrderRepository};
pub use product::{InMemoryProductRepository, ProductRepository};
pub use user::{InMemoryUserRepository, UserRepository};
