pub mod auth_dto;
pub mod order_dto;
pub mod product_dto;

pub use auth_dto::{LoginRequest, RegisterRequest};
pub use order_dto::CreateOrderRequest;
pub use product_dto::CreateProductRequest;
