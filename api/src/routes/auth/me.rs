use actix_web::{web, HttpResponse};

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;
use crate::state::AppState;

/// Handler for GET /api/auth/me
pub async fn me<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    auth: OptionalAuth,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let profile = state.auth_service.profile(auth.caller()).await?;
    Ok(HttpResponse::Ok().json(profile))
}
