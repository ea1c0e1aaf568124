//! CORS middleware configuration for cross-origin requests.
//!
//! The storefront SPA is served from a different origin than the API in
//! most deployments. Development allows any origin; other environments
//! accept only the origins listed in `CORS_ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sf_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::debug!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    tracing::debug!(origins = ?config.allowed_origins, "Configuring CORS allow-list");
    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
