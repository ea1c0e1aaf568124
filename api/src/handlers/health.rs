use actix_web::{web, HttpResponse};
use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;
use sf_shared::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// GET /health
///
/// Reports 503 when the configured database does not answer.
pub async fn health_check<U, H, P, O>(state: web::Data<AppState<U, H, P, O>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let status = match &state.database {
        Some(pool) => match pool.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::Degraded,
            Err(_) => HealthStatus::Unhealthy,
        },
        None => HealthStatus::Healthy,
    };

    let body = HealthResponse::new(
        status,
        "storefront-api",
        env!("CARGO_PKG_VERSION"),
        state.storage(),
    );

    match status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
        _ => HttpResponse::Ok().json(body),
    }
}
