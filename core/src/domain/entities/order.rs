//! Order entity and its read model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::Product;

/// Number of trailing card digits kept on an order
pub const CARD_SUFFIX_LENGTH: usize = 4;

/// Outcome of the simulated charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Paid,
    Declined,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "paid",
            OrderStatus::Declined => "declined",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(OrderStatus::Paid),
            "declined" => Ok(OrderStatus::Declined),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}

/// A placed order. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    pub product_id: Uuid,
    /// Masked card suffix, never the full number
    pub card_last_four: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        user_id: Uuid,
        product_id: Uuid,
        card_last_four: String,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            card_last_four,
            status,
            created_at: super::now_micros(),
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Order joined with the product fields the storefront displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_price: Decimal,
    pub product_image: String,
    pub card_last_four: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderDetails {
    pub fn new(order: Order, product: &Product) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            product_id: order.product_id,
            product_name: product.name.clone(),
            product_price: product.price,
            product_image: product.image_url.clone(),
            card_last_four: order.card_last_four,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
