use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::dto::LoginRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/auth/login
///
/// Returns `200 OK` with the same body as registration; `401` on bad credentials.
pub async fn login<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    request.validate()?;

    let response = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
