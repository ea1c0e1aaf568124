//! Unit tests for order placement and visibility

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    Caller, DomainError, InMemoryOrderRepository, InMemoryProductRepository, NewProduct,
    OrderService, OrderStatus, Product, Role, ValidationError,
};

struct Fixture {
    orders: Arc<InMemoryOrderRepository>,
    product: Product,
    service: OrderService<InMemoryProductRepository, InMemoryOrderRepository>,
}

fn fixture() -> Fixture {
    let product = Product::new(NewProduct {
        name: "Espresso Cup".to_string(),
        description: "Porcelain".to_string(),
        price: Decimal::from_str("12.50").unwrap(),
        image_url: "/media/cup.png".to_string(),
    });
    let products = Arc::new(InMemoryProductRepository::with_products(vec![product.clone()]));
    let orders = Arc::new(InMemoryOrderRepository::new());
    let service = OrderService::new(products, orders.clone());
    Fixture {
        orders,
        product,
        service,
    }
}

fn customer(name: &str) -> Caller {
    Caller::new(Uuid::new_v4(), name, Role::Customer)
}

fn admin() -> Caller {
    Caller::new(Uuid::new_v4(), "root", Role::Admin)
}

#[tokio::test]
async fn test_place_order_paid() {
    let f = fixture();
    let alice = customer("alice");

    let details = f
        .service
        .place_order(Some(&alice), f.product.id, "1234567890123456")
        .await
        .unwrap();

    assert_eq!(details.status, OrderStatus::Paid);
    assert_eq!(details.card_last_four, "3456");
    assert_eq!(details.user_id, alice.user_id);
    assert_eq!(details.product_name, "Espresso Cup");
    assert_eq!(details.product_price, Decimal::from_str("12.50").unwrap());
    assert_eq!(f.orders.count().await, 1);
}

#[tokio::test]
async fn test_declined_card_persists_nothing() {
    let f = fixture();
    let alice = customer("alice");

    let result = f
        .service
        .place_order(Some(&alice), f.product.id, "0000123456789012")
        .await;

    assert!(matches!(result, Err(DomainError::PaymentDeclined)));
    assert_eq!(f.orders.count().await, 0);
}

#[tokio::test]
async fn test_short_card_is_invalid_input() {
    let f = fixture();
    let alice = customer("alice");

    let result = f.service.place_order(Some(&alice), f.product.id, "123").await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));
    assert_eq!(f.orders.count().await, 0);
}

#[tokio::test]
async fn test_anonymous_order_is_unauthorized() {
    let f = fixture();

    for card in ["1234567890123456", "0000123456789012", "123"] {
        let result = f.service.place_order(None, f.product.id, card).await;
        assert!(matches!(result, Err(DomainError::Unauthorized)), "{card}");
    }
    assert_eq!(f.orders.count().await, 0);
}

#[tokio::test]
async fn test_unknown_product() {
    let f = fixture();
    let alice = customer("alice");

    let result = f
        .service
        .place_order(Some(&alice), Uuid::new_v4(), "4111111111111111")
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert_eq!(f.orders.count().await, 0);
}

#[tokio::test]
async fn test_decline_takes_precedence_over_unknown_product() {
    let f = fixture();
    let alice = customer("alice");

    let result = f
        .service
        .place_order(Some(&alice), Uuid::new_v4(), "0000111111111111")
        .await;

    assert!(matches!(result, Err(DomainError::PaymentDeclined)));
}

#[tokio::test]
async fn test_list_orders_visibility() {
    let f = fixture();
    let alice = customer("alice");
    let bob = customer("bob");

    f.service
        .place_order(Some(&alice), f.product.id, "4111111111111111")
        .await
        .unwrap();
    f.service
        .place_order(Some(&bob), f.product.id, "5500000000000004")
        .await
        .unwrap();
    let latest = f
        .service
        .place_order(Some(&alice), f.product.id, "4242424242424242")
        .await
        .unwrap();

    let mine = f.service.list_orders(Some(&alice)).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|o| o.user_id == alice.user_id));
    assert_eq!(mine[0].id, latest.id);

    let everything = f.service.list_orders(Some(&admin())).await.unwrap();
    assert_eq!(everything.len(), 3);

    assert!(matches!(
        f.service.list_orders(None).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_get_order_hides_other_users_orders() {
    let f = fixture();
    let alice = customer("alice");
    let bob = customer("bob");

    let order = f
        .service
        .place_order(Some(&alice), f.product.id, "4111111111111111")
        .await
        .unwrap();

    let own = f.service.get_order(Some(&alice), order.id).await.unwrap();
    assert_eq!(own.id, order.id);

    assert!(matches!(
        f.service.get_order(Some(&bob), order.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(f.service.get_order(Some(&admin()), order.id).await.is_ok());
    assert!(matches!(
        f.service.get_order(None, order.id).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_list_all_orders_requires_admin() {
    let f = fixture();
    let alice = customer("alice");
    f.service
        .place_order(Some(&alice), f.product.id, "4111111111111111")
        .await
        .unwrap();

    assert!(matches!(
        f.service.list_all_orders(Some(&alice)).await,
        Err(DomainError::Forbidden)
    ));
    assert!(matches!(
        f.service.list_all_orders(None).await,
        Err(DomainError::Unauthorized)
    ));
    assert_eq!(f.service.list_all_orders(Some(&admin())).await.unwrap().len(), 1);
}
