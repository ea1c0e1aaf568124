//! The authenticated identity behind a request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::order::Order;
use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, DomainResult, TokenError};

/// Identity resolved from a verified access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: Uuid, username: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins see every order, everyone else only their own
    pub fn can_view(&self, order: &Order) -> bool {
        self.is_admin() || order.is_owned_by(self.user_id)
    }

    /// Rejects anonymous requests with `Unauthorized`
    pub fn require(caller: Option<&Caller>) -> DomainResult<&Caller> {
        caller.ok_or(DomainError::Unauthorized)
    }

    pub fn require_admin(&self) -> DomainResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Forbidden)
        }
    }
}

impl From<&User> for Caller {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.role)
    }
}

impl TryFrom<&Claims> for Caller {
    type Error = DomainError;

    fn try_from(claims: &Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))?;
        Ok(Self::new(user_id, claims.username.clone(), claims.role))
    }
}
