//! Application state shared across workers

use std::sync::Arc;

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::{AuthService, AuthServiceConfig, PasswordHasherTrait};
use sf_core::services::order::OrderService;
use sf_core::services::product::ProductService;
use sf_core::services::token::{TokenService, TokenServiceConfig};
use sf_infra::database::DatabasePool;
use sf_shared::AppConfig;

/// Application state that holds shared services
pub struct AppState<U, H, P, O>
where
    U: UserRepository,
    H: PasswordHasherTrait,
    P: ProductRepository,
    O: OrderRepository,
{
    pub auth_service: Arc<AuthService<U, H>>,
    pub order_service: Arc<OrderService<P, O>>,
    pub product_service: Arc<ProductService<P>>,
    pub token_service: Arc<TokenService>,
    /// Present when running against MySQL; used by the health check
    pub database: Option<DatabasePool>,
}

impl<U, H, P, O> AppState<U, H, P, O>
where
    U: UserRepository,
    H: PasswordHasherTrait,
    P: ProductRepository,
    O: OrderRepository,
{
    /// Wire services over the given repositories
    pub fn new(
        users: Arc<U>,
        password_hasher: Arc<H>,
        products: Arc<P>,
        orders: Arc<O>,
        config: &AppConfig,
        database: Option<DatabasePool>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
        let auth_config = AuthServiceConfig {
            allow_registration: config.registration.enabled,
            ..AuthServiceConfig::default()
        };
        let auth_service = Arc::new(AuthService::new(
            users,
            password_hasher,
            token_service.clone(),
            auth_config,
        ));

        Self {
            auth_service,
            order_service: Arc::new(OrderService::new(products.clone(), orders)),
            product_service: Arc::new(ProductService::new(products)),
            token_service,
            database,
        }
    }

    /// Name of the storage backend in use
    pub fn storage(&self) -> &'static str {
        if self.database.is_some() {
            "mysql"
        } else {
            "memory"
        }
    }
}
