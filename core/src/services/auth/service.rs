//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, Caller, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::PasswordHasherTrait;
use super::validation::{validate_password, validate_username};

/// Authentication service for account registration and login
pub struct AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasherTrait,
{
    /// User repository for account persistence
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U, H> AuthService<U, H>
where
    U: UserRepository,
    H: PasswordHasherTrait,
{
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new customer account and sign it in
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token and profile of the new account
    /// * `Err(DomainError)` - Registration disabled, invalid input or a taken username
    pub async fn register(
        &self,
        username: &str,
        email: Option<String>,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        validate_username(username)?;
        validate_password(password, self.config.min_password_length)?;

        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let email = email.filter(|e| !e.trim().is_empty());
        let user = self
            .user_repository
            .create(User::new(username.to_string(), email, password_hash))
            .await?;

        info!(user_id = %user.id, username = %user.username, "Registered new user");
        self.respond(&user)
    }

    /// Authenticate with username and password
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                warn!(username = %username, "Login attempt for unknown user");
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        if !self
            .password_hasher
            .verify(password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::AuthenticationFailed.into());
        }

        info!(user_id = %user.id, is_staff = user.is_staff(), "User logged in");
        self.respond(&user)
    }

    /// Profile of the authenticated caller
    pub async fn profile(&self, caller: Option<&Caller>) -> DomainResult<UserProfile> {
        let caller = Caller::require(caller)?;
        let user = self
            .user_repository
            .find_by_id(caller.user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        Ok(UserProfile::from(&user))
    }

    /// Provision an administrator account
    ///
    /// Idempotent: an existing account with the same username is returned
    /// unchanged.
    pub async fn create_admin(&self, username: &str, password: &str) -> DomainResult<User> {
        validate_username(username)?;
        validate_password(password, self.config.min_password_length)?;

        if let Some(existing) = self.user_repository.find_by_username(username).await? {
            if !existing.is_staff() {
                warn!(username = %username, "Bootstrap admin name belongs to a non-admin account");
            }
            return Ok(existing);
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let admin = self
            .user_repository
            .create(User::new_admin(username.to_string(), password_hash))
            .await?;

        info!(user_id = %admin.id, username = %admin.username, "Created admin account");
        Ok(admin)
    }

    fn respond(&self, user: &User) -> DomainResult<AuthResponse> {
        let (token, expires_in) = self.token_service.issue(user)?;
        Ok(AuthResponse::new(token, expires_in, user))
    }
}
