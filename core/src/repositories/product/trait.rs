//! Product repository trait for the catalogue.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Fetch several products at once; missing ids are skipped
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;

    /// All products ordered by name
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    async fn create(&self, product: Product) -> Result<Product, DomainError>;
}
