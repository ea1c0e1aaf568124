//! Order repository trait.
//!
//! Orders are append-only: the trait exposes creation and reads, never
//! update or delete.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::errors::DomainError;

/// Selects which orders a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilter {
    /// Restrict to a single owner; `None` means every order
    pub owner: Option<Uuid>,
}

impl OrderFilter {
    pub fn all() -> Self {
        Self { owner: None }
    }

    pub fn owned_by(user_id: Uuid) -> Self {
        Self {
            owner: Some(user_id),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.owner.map_or(true, |owner| order.user_id == owner)
    }
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Orders matching the filter, newest first
    async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}
