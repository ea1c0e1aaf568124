//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub is_staff: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_staff: user.is_staff(),
        }
    }
}

/// Authentication response returned after register or login
///
/// Contains the bearer token, its lifetime in seconds and the
/// profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    pub user: UserProfile,
}

impl AuthResponse {
    pub fn new(token: String, expires_in: i64, user: &User) -> Self {
        Self {
            token,
            expires_in,
            user: UserProfile::from(user),
        }
    }
}
