use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of POST /api/orders
///
/// `product_id` stays a string so that a malformed id is reported after
/// the caller and card checks, like any other unknown product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: String,
    pub card_number: String,
}

impl CreateOrderRequest {
    /// Product id, or the nil id (which never matches a product) when unparsable
    pub fn product_uuid(&self) -> Uuid {
        Uuid::parse_str(self.product_id.trim()).unwrap_or(Uuid::nil())
    }

    /// Card number with surrounding whitespace removed
    pub fn card_number(&self) -> &str {
        self.card_number.trim()
    }
}
