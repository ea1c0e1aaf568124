use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::dto::RegisterRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "password123" }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "token", "expires_in", "user": { "id", "username", "email", "is_staff" } }`.
/// `400` for invalid input or a taken username.
pub async fn register<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let request = request.into_inner().normalized();
    request.validate()?;

    let response = state
        .auth_service
        .register(&request.username, request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(response))
}
