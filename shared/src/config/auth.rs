//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 86400, // 24 hours
            issuer: String::from("storefront"),
            audience: String::from("storefront-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);

        Self {
            secret,
            access_token_expiry,
            ..defaults
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Self-service sign-up switch
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    pub enabled: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl RegistrationConfig {
    /// `REGISTRATION_ENABLED=false` (or `0`, `no`, `off`) closes sign-up
    pub fn from_env() -> Self {
        let enabled = std::env::var("REGISTRATION_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        Self { enabled }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Credentials for an administrator account provisioned at startup
#[derive(Clone, Deserialize, Serialize)]
pub struct AdminBootstrapConfig {
    pub username: String,
    pub password: String,
}

impl AdminBootstrapConfig {
    /// Read `STOREFRONT_ADMIN_USERNAME` / `STOREFRONT_ADMIN_PASSWORD`; both must be set
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("STOREFRONT_ADMIN_USERNAME").ok()?;
        let password = std::env::var("STOREFRONT_ADMIN_PASSWORD").ok()?;
        Some(Self { username, password })
    }
}

impl std::fmt::Debug for AdminBootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrapConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
