//! Type definitions shared by the API layer
//!
//! - `response` - health checks

pub mod response;

pub use response::{HealthResponse, HealthStatus};
