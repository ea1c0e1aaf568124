//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod caller;

// Re-export commonly used types
pub use auth_response::{AuthResponse, UserProfile};
pub use caller::Caller;
