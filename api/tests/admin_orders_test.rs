//! Staff-only order listing

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, TestContext};
use sf_api::app::create_app;

#[actix_web::test]
async fn test_admin_sees_every_order() {
    let ctx = TestContext::new();
    let alice = ctx.customer_token("alice").await;
    let bob = ctx.customer_token("bob").await;
    let admin = ctx.admin_token().await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for token in [&alice, &bob] {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer(token))
            .set_json(json!({
                "product_id": ctx.product.id.to_string(),
                "card_number": "1234567890123456"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/api/admin/orders")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Admins also get every order from the regular listing
    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_customer_is_forbidden() {
    let ctx = TestContext::new();
    let alice = ctx.customer_token("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/admin/orders")
        .insert_header(bearer(&alice))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "FORBIDDEN");
}

#[actix_web::test]
async fn test_anonymous_is_unauthorized() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/admin/orders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
