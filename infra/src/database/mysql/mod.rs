//! MySQL repository implementations

mod order_repository_impl;
mod product_repository_impl;
mod user_repository_impl;

pub use order_repository_impl::MySqlOrderRepository;
pub use product_repository_impl::MySqlProductRepository;
pub use user_repository_impl::MySqlUserRepository;

use sf_core::errors::DomainError;
use uuid::Uuid;

/// Wraps a query failure as an internal domain error, logging the cause
pub(crate) fn query_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, context, "Database query failed");
        DomainError::internal(format!("{}: {}", context, e))
    }
}

pub(crate) fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::internal(format!("Failed to get {}: {}", column, e))
}

pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
}
