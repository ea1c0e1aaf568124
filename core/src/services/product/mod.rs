//! Product catalogue

mod service;

pub use service::{ProductService, MAX_PRODUCT_NAME_LENGTH};
