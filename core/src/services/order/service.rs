use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderDetails, OrderStatus};
use crate::domain::entities::product::Product;
use crate::domain::value_objects::Caller;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{OrderFilter, OrderRepository, ProductRepository};
use crate::services::payment::{check_card, mask_card_number, CardCheck};

/// Places orders against the simulated payment check and enforces who may
/// see which orders.
pub struct OrderService<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    product_repository: Arc<P>,
    order_repository: Arc<O>,
}

impl<P, O> OrderService<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(product_repository: Arc<P>, order_repository: Arc<O>) -> Self {
        Self {
            product_repository,
            order_repository,
        }
    }

    /// Charge the card and record a paid order
    ///
    /// Checks run in a fixed order: caller, card format, decline rule,
    /// product lookup. Nothing is persisted unless every check passes.
    ///
    /// # Returns
    ///
    /// * `Ok(OrderDetails)` - The stored order with status `paid`
    /// * `Err(DomainError::Unauthorized)` - No authenticated caller
    /// * `Err(DomainError::ValidationErr(..))` - Malformed card number
    /// * `Err(DomainError::PaymentDeclined)` - Card rejected
    /// * `Err(DomainError::NotFound { .. })` - Unknown product
    pub async fn place_order(
        &self,
        caller: Option<&Caller>,
        product_id: Uuid,
        card_number: &str,
    ) -> DomainResult<OrderDetails> {
        let caller = Caller::require(caller)?;
        let masked = mask_card_number(card_number);

        let last_four = match check_card(card_number) {
            CardCheck::Declined => {
                warn!(user_id = %caller.user_id, card = %masked, "Payment declined");
                return Err(DomainError::PaymentDeclined);
            }
            check => check.into_result().map_err(|e| {
                debug!(user_id = %caller.user_id, card = %masked, "Rejected malformed card number");
                e
            })?,
        };

        let product = self
            .product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product"))?;

        let order = self
            .order_repository
            .create(Order::new(
                caller.user_id,
                product.id,
                last_four,
                OrderStatus::Paid,
            ))
            .await?;

        info!(
            order_id = %order.id,
            user_id = %caller.user_id,
            product_id = %product.id,
            card = %masked,
            "Order placed"
        );

        Ok(OrderDetails::new(order, &product))
    }

    /// Orders visible to the caller, newest first
    ///
    /// Admins get every order; everyone else only their own.
    pub async fn list_orders(&self, caller: Option<&Caller>) -> DomainResult<Vec<OrderDetails>> {
        let caller = Caller::require(caller)?;
        let filter = if caller.is_admin() {
            OrderFilter::all()
        } else {
            OrderFilter::owned_by(caller.user_id)
        };

        let orders = self.order_repository.list(filter).await?;
        self.with_products(orders).await
    }

    /// A single order, hidden as `NotFound` when the caller may not see it
    pub async fn get_order(
        &self,
        caller: Option<&Caller>,
        order_id: Uuid,
    ) -> DomainResult<OrderDetails> {
        let caller = Caller::require(caller)?;

        let order = self
            .order_repository
            .find_by_id(order_id)
            .await?
            .filter(|order| caller.can_view(order))
            .ok_or_else(|| DomainError::not_found("Order"))?;

        let mut details = self.with_products(vec![order]).await?;
        details
            .pop()
            .ok_or_else(|| DomainError::internal("order lost while attaching product"))
    }

    /// Every order in the store; administrators only
    pub async fn list_all_orders(
        &self,
        caller: Option<&Caller>,
    ) -> DomainResult<Vec<OrderDetails>> {
        let caller = Caller::require(caller)?;
        caller.require_admin()?;

        let orders = self.order_repository.list(OrderFilter::all()).await?;
        self.with_products(orders).await
    }

    async fn with_products(&self, orders: Vec<Order>) -> DomainResult<Vec<OrderDetails>> {
        let mut ids: Vec<Uuid> = orders.iter().map(|o| o.product_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let products: HashMap<Uuid, Product> = self
            .product_repository
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        orders
            .into_iter()
            .map(|order| match products.get(&order.product_id) {
                Some(product) => Ok(OrderDetails::new(order, product)),
                None => {
                    error!(order_id = %order.id, product_id = %order.product_id, "Order references a missing product");
                    Err(DomainError::internal("order references a missing product"))
                }
            })
            .collect()
    }
}
