//! # Auth Service
//!
//! Login, bearer-token authentication, and user bootstrap, combined over an
//! injected user repository.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use super::crypto::PasswordPolicy;
use super::errors::{AuthError, AuthResult};
use super::jwt::{JwtConfig, JwtManager};
use super::user::{User, UserRepository};

/// Login request body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Auth service combining credential checks and token management
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    jwt_manager: JwtManager,
    password_policy: PasswordPolicy,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service over the given repository
    pub fn new(user_repo: Arc<U>, jwt_config: JwtConfig, password_policy: PasswordPolicy) -> Self {
        Self {
            user_repo,
            jwt_manager: JwtManager::new(jwt_config),
            password_policy,
        }
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown usernames and wrong passwords produce the same error, so the
    /// response does not reveal which usernames exist.
    pub fn login(&self, request: &LoginRequest) -> AuthResult<(User, String)> {
        let user = self
            .user_repo
            .find_by_username(&request.username)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&request.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_manager.generate_token(&user)?;
        Ok((user, token))
    }

    /// Resolve the requester identity from an `Authorization` header value.
    ///
    /// Accepts `Bearer <token>`; anything else is an authentication failure,
    /// distinct from not-found and validation errors.
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthResult<Uuid> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::AuthenticationRequired)?;

        let claims = self.jwt_manager.validate_token(token)?;
        JwtManager::get_user_id(&claims)
    }

    /// Create a user record (bootstrap path; there is no HTTP signup).
    pub fn create_user(&self, username: &str, name: &str, password: &str) -> AuthResult<User> {
        self.password_policy.validate(password)?;

        let user = User::new(username, name, password)?;
        self.user_repo.create(&user)?;
        Ok(user)
    }

    /// All known users, for the display listing
    pub fn users(&self) -> AuthResult<Vec<User>> {
        self.user_repo.all()
    }

    /// Seconds a freshly issued token stays valid
    pub fn token_ttl_seconds(&self) -> i64 {
        self.jwt_manager.ttl_seconds()
    }
}
