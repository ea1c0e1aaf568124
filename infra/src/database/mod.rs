//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Idempotent schema migrations
//! - Repository implementations for users, products and orders

pub mod connection;
pub mod migrations;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use migrations::run_migrations;
pub use mysql::{MySqlOrderRepository, MySqlProductRepository, MySqlUserRepository};
