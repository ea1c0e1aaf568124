use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::product::{NewProduct, Product};
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::ProductRepository;

pub const MAX_PRODUCT_NAME_LENGTH: usize = 200;

/// Read access to the catalogue for everyone, writes for admins
pub struct ProductService<P: ProductRepository> {
    product_repository: Arc<P>,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(product_repository: Arc<P>) -> Self {
        Self { product_repository }
    }

    pub async fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.product_repository.list().await
    }

    pub async fn get_product(&self, id: Uuid) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))
    }

    pub async fn create_product(
        &self,
        caller: Option<&Caller>,
        input: NewProduct,
    ) -> DomainResult<Product> {
        let caller = Caller::require(caller)?;
        caller.require_admin()?;

        let input = NewProduct {
            name: input.name.trim().to_string(),
            ..input
        };
        validate_new_product(&input)?;

        let product = self.product_repository.create(Product::new(input)).await?;
        info!(product_id = %product.id, name = %product.name, created_by = %caller.user_id, "Product created");
        Ok(product)
    }
}

fn validate_new_product(input: &NewProduct) -> Result<(), ValidationError> {
    let length = input.name.chars().count();
    if length == 0 {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }
    if length > MAX_PRODUCT_NAME_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "name".to_string(),
            min: 1,
            max: MAX_PRODUCT_NAME_LENGTH,
            actual: length,
        });
    }
    if input.price < Decimal::ZERO {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
        });
    }
    Ok(())
}
