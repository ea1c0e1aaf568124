//! Route handlers grouped by resource

pub mod admin;
pub mod auth;
pub mod orders;
pub mod products;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::handlers::ApiError;

/// Parses a path id; unparsable ids become the nil id, which matches nothing
pub(crate) fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or(Uuid::nil())
}

/// Decodes a JSON body read as raw bytes
///
/// Protected handlers take `web::Bytes` and call this only after the caller
/// check, so anonymous requests get 401 whatever the body holds.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Json deserialize error: {}", e)))
}
