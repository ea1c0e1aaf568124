use actix_web::{web, HttpResponse};

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;
use crate::routes::parse_id;
use crate::state::AppState;

/// Handler for GET /api/orders/{id}
///
/// Another customer's order answers 404, same as a missing one.
pub async fn get_order<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    auth: OptionalAuth,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let order = state
        .order_service
        .get_order(auth.caller(), parse_id(&path))
        .await?;

    Ok(HttpResponse::Ok().json(order))
}
