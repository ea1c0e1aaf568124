//! End-to-end order placement through the HTTP layer

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, TestContext};
use sf_api::app::create_app;

#[actix_web::test]
async fn test_valid_card_creates_paid_order() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer(&token))
        .set_json(json!({
            "product_id": ctx.product.id.to_string(),
            "card_number": "1234567890123456"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "paid");
    assert_eq!(body["card_last_four"], "3456");
    assert_eq!(body["product_id"], ctx.product.id.to_string());
    assert_eq!(body["product_name"], "Desk Lamp");
    assert_eq!(body["product_price"], "19.99");
    assert!(body.get("card_number").is_none());
    assert_eq!(ctx.orders.count().await, 1);
}

#[actix_web::test]
async fn test_declined_card_returns_402_and_saves_nothing() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer(&token))
        .set_json(json!({
            "product_id": ctx.product.id.to_string(),
            "card_number": "0000123456789012"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "PAYMENT_DECLINED");
    assert!(body["message"].is_string());
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_short_card_returns_400_and_saves_nothing() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for card_number in ["123", "12345678901234567890", "1234abcd90123456"] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer(&token))
            .set_json(json!({
                "product_id": ctx.product.id.to_string(),
                "card_number": card_number
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{card_number}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["field"], "card_number");
    }
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_unauthenticated_order_is_rejected_for_any_card() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for card_number in ["1234567890123456", "0000123456789012", "123"] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(json!({
                "product_id": ctx.product.id.to_string(),
                "card_number": card_number
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{card_number}");
    }
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_unauthenticated_order_is_rejected_before_body_parsing() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let bodies = [
        json!({}),
        json!({ "product_id": ctx.product.id.to_string(), "card_number": 1234567890123456u64 }),
        json!({ "product_id": ctx.product.id.to_string() }),
    ];
    for body in &bodies {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{body}");
    }

    let req = test::TestRequest::post().uri("/api/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_authenticated_order_with_numeric_card_is_bad_request() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer(&token))
        .set_json(json!({
            "product_id": ctx.product.id.to_string(),
            "card_number": 1234567890123456u64
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_invalid_token_is_rejected_by_middleware() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_unknown_product_returns_404() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for product_id in [uuid::Uuid::new_v4().to_string(), "42".to_string()] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer(&token))
            .set_json(json!({
                "product_id": product_id,
                "card_number": "1234567890123456"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(ctx.orders.count().await, 0);
}

#[actix_web::test]
async fn test_customers_only_see_their_own_orders() {
    let ctx = TestContext::new();
    let alice = ctx.customer_token("alice").await;
    let bob = ctx.customer_token("bob").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let mut alice_order_id = String::new();
    for (token, card) in [(&alice, "4111111111111111"), (&bob, "5500000000000004")] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer(token))
            .set_json(json!({
                "product_id": ctx.product.id.to_string(),
                "card_number": card
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        if token == &alice {
            alice_order_id = body["id"].as_str().unwrap().to_string();
        }
    }

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["card_last_four"], "1111");

    // Alice can read her order, Bob gets a 404 for it
    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", alice_order_id))
        .insert_header(bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", alice_order_id))
        .insert_header(bearer(&bob))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_trailing_slash_and_token_scheme() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/orders/")
        .insert_header(("Authorization", format!("Token {}", token)))
        .set_json(json!({
            "product_id": ctx.product.id.to_string(),
            "card_number": "1234567890123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["card_last_four"], "0123");
}

#[actix_web::test]
async fn test_malformed_body_returns_400() {
    let ctx = TestContext::new();
    let token = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer(&token))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"product_id\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}
