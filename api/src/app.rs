//! Application factory
//!
//! Builds the actix-web `App` over an [`AppState`]. The same factory backs
//! the binary and the integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::NormalizePath,
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use sf_core::repositories::{OrderRepository, ProductRepository, UserRepository};
use sf_core::services::auth::PasswordHasherTrait;
use sf_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::{health::health_check, ApiError};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{admin, auth, orders, products};
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, H, P, O>(
    app_state: web::Data<AppState<U, H, P, O>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasherTrait + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_service.clone());
    let cors = create_cors(&config.cors);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    // Protected handlers read raw bytes so the caller check runs first
    let payload_config = web::PayloadConfig::new(config.server.max_payload_size);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(payload_config)
        // Last wrap runs first: request span, path normalisation, CORS, then auth
        .wrap(jwt_auth)
        .wrap(cors)
        .wrap(NormalizePath::trim())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<U, H, P, O>))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, H, P, O>))
                        .route("/login", web::post().to(auth::login::<U, H, P, O>))
                        .route("/me", web::get().to(auth::me::<U, H, P, O>)),
                )
                .service(
                    web::scope("/products")
                        .route("", web::get().to(products::list_products::<U, H, P, O>))
                        .route("", web::post().to(products::create_product::<U, H, P, O>))
                        .route("/{id}", web::get().to(products::get_product::<U, H, P, O>)),
                )
                .service(
                    web::scope("/orders")
                        .route("", web::get().to(orders::list_orders::<U, H, P, O>))
                        .route("", web::post().to(orders::create_order::<U, H, P, O>))
                        .route("/{id}", web::get().to(orders::get_order::<U, H, P, O>)),
                )
                .service(
                    web::scope("/admin")
                        .route("/orders", web::get().to(admin::list_all_orders::<U, H, P, O>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
