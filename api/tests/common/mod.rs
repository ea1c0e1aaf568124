//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use actix_web::web;
use rust_decimal::Decimal;

use sf_api::state::AppState;
use sf_core::domain::entities::product::{NewProduct, Product};
use sf_core::repositories::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemoryUserRepository,
};
use sf_infra::BcryptPasswordHasher;
use sf_shared::{AppConfig, JwtConfig};

pub type TestState = AppState<
    InMemoryUserRepository,
    BcryptPasswordHasher,
    InMemoryProductRepository,
    InMemoryOrderRepository,
>;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-password";

/// In-memory application with one product in the catalogue
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub orders: Arc<InMemoryOrderRepository>,
    pub product: Product,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig {
            jwt: JwtConfig::new("integration-test-secret"),
            ..AppConfig::default()
        })
    }

    pub fn with_config(config: AppConfig) -> Self {
        let product = Product::new(NewProduct {
            name: "Desk Lamp".to_string(),
            description: "Adjustable LED lamp".to_string(),
            price: Decimal::from_str("19.99").unwrap(),
            image_url: "/media/products/lamp.png".to_string(),
        });

        let orders = Arc::new(InMemoryOrderRepository::new());
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(BcryptPasswordHasher::with_cost(4)),
            Arc::new(InMemoryProductRepository::with_products([product.clone()])),
            orders.clone(),
            &config,
            None,
        );

        Self {
            state: web::Data::new(state),
            config,
            orders,
            product,
        }
    }

    /// Registers a customer through the service and returns its bearer token
    pub async fn customer_token(&self, username: &str) -> String {
        self.state
            .auth_service
            .register(username, None, "password123")
            .await
            .unwrap()
            .token
    }

    /// Provisions the admin account and returns its bearer token
    pub async fn admin_token(&self) -> String {
        self.state
            .auth_service
            .create_admin(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .unwrap();
        self.state
            .auth_service
            .login(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .unwrap()
            .token
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
