use actix_web::{web, HttpResponse};

use sf_core::domain::value_objects::Caller;
use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::dto::CreateOrderRequest;
use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;
use crate::routes::parse_json;
use crate::state::AppState;

/// Handler for POST /api/orders
///
/// # Request Body
///
/// ```json
/// { "product_id": "2f1c...", "card_number": "1234567890123456" }
/// ```
///
/// # Response
///
/// * `201 Created` - order with `status: "paid"` and the card's last four digits
/// * `400` - malformed body or card number
/// * `401` - no credentials, checked before the body is read
/// * `402` - card declined
/// * `404` - unknown product
pub async fn create_order<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    auth: OptionalAuth,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let caller = Caller::require(auth.caller())?;
    let request: CreateOrderRequest = parse_json(&body)?;

    let order = state
        .order_service
        .place_order(Some(caller), request.product_uuid(), request.card_number())
        .await?;

    Ok(HttpResponse::Created().json(order))
}
