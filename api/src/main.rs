use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use sf_api::{app::create_app, config::load_config, state::AppState, telemetry::init_tracing};
use sf_core::repositories::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemoryUserRepository, OrderRepository,
    ProductRepository, UserRepository,
};
use sf_core::services::auth::PasswordHasherTrait;
use sf_infra::database::{
    run_migrations, DatabasePool, MySqlOrderRepository, MySqlProductRepository,
    MySqlUserRepository,
};
use sf_infra::BcryptPasswordHasher;
use sf_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging);

    info!(
        environment = ?config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Storefront API server"
    );
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let hasher = Arc::new(BcryptPasswordHasher::new());

    if config.database.is_configured() {
        let pool = DatabasePool::new(&config.database)
            .await
            .context("failed to connect to MySQL")?;
        if config.database.run_migrations {
            run_migrations(pool.get_pool())
                .await
                .context("failed to run migrations")?;
        }
        info!(pool = %pool.get_statistics(), "Using MySQL storage");

        let state = AppState::new(
            Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
            hasher,
            Arc::new(MySqlProductRepository::new(pool.get_pool().clone())),
            Arc::new(MySqlOrderRepository::new(pool.get_pool().clone())),
            &config,
            Some(pool.clone()),
        );
        let result = serve(config, state).await;
        pool.close().await;
        result
    } else {
        warn!("DATABASE_URL is not set; data lives in memory and is lost on shutdown");
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            hasher,
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
            &config,
            None,
        );
        serve(config, state).await
    }
}

async fn serve<U, H, P, O>(config: AppConfig, state: AppState<U, H, P, O>) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    if let Some(admin) = &config.admin {
        let user = state
            .auth_service
            .create_admin(&admin.username, &admin.password)
            .await
            .context("failed to provision admin account")?;
        info!(username = %user.username, "Admin account ready");
    }

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let state = web::Data::new(state);

    info!(address = %bind_address, "Listening");

    let mut server = HttpServer::new(move || create_app(state.clone(), &config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error")
}
