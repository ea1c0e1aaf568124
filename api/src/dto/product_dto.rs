use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_core::domain::entities::product::NewProduct;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Accepts `"29.99"` or `29.99`
    pub price: Decimal,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub image_url: String,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            image_url: request.image_url,
        }
    }
}
