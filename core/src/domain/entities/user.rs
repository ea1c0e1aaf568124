//! User entity representing a registered account in the storefront.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper who sees only their own orders
    #[default]
    Customer,
    /// Staff with visibility over every order and the catalogue
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Optional contact email
    pub email: Option<String>,

    /// Password hash produced by the configured hasher
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role of the user
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new customer account
    pub fn new(username: String, email: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            role: Role::Customer,
            created_at: super::now_micros(),
        }
    }

    /// Creates a new administrator account
    pub fn new_admin(username: String, password_hash: String) -> Self {
        Self {
            role: Role::Admin,
            ..Self::new(username, None, password_hash)
        }
    }

    /// Whether the user has staff privileges
    pub fn is_staff(&self) -> bool {
        self.role == Role::Admin
    }
}
