use actix_web::{web, HttpResponse};

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;
use crate::state::AppState;

/// Handler for GET /api/orders
///
/// Customers receive their own orders, admins every order, newest first.
pub async fn list_orders<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    auth: OptionalAuth,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let orders = state.order_service.list_orders(auth.caller()).await?;
    Ok(HttpResponse::Ok().json(orders))
}
