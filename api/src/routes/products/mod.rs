//! Product catalogue handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use sf_core::domain::value_objects::Caller;
use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;

use crate::dto::CreateProductRequest;
use crate::handlers::ApiError;
use crate::middleware::OptionalAuth;
use crate::routes::{parse_id, parse_json};
use crate::state::AppState;

/// GET /api/products
pub async fn list_products<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// GET /api/products/{id}
pub async fn get_product<U, H, P, O>(
    state: web::Data<AppState<U, H, P, O>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let product = state.product_service.get_product(parse_id(&path)).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// POST /api/products (admin only)
pub async fn create_product<U, H, P, O>(
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
    // Caller checks take precedence over the body
    Caller::require(auth.caller())?.require_admin()?;
    let request: CreateProductRequest = parse_json(&body)?;
    request.validate()?;

    let product = state
        .product_service
        .create_product(auth.caller(), request.into())
        .await?;

    Ok(HttpResponse::Created().json(product))
}
