//! # User Management
//!
//! User model and repository. Users own blogs; the `blogs` field holds the
//! ids of every blog created by the user.
//!
//! Ownership note: `blogs` is appended to when a blog is created, but it is
//! NOT pruned when a blog is deleted. Callers that resolve the list must
//! tolerate dangling ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::crypto::{hash_password, verify_password};
use super::errors::{AuthError, AuthResult};

/// User model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,

    /// Login name (unique)
    pub username: String,

    /// Display name
    pub name: String,

    /// Argon2id password hash (never plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Ids of blogs created by this user, in creation order
    pub blogs: Vec<Uuid>,
}

impl User {
    /// Create a new user with the given credentials
    pub fn new(username: &str, name: &str, password: &str) -> AuthResult<Self> {
        let password_hash = hash_password(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            name: name.to_string(),
            password_hash,
            blogs: Vec::new(),
        })
    }

    /// Verify a password against this user's stored hash
    pub fn verify_password(&self, password: &str) -> AuthResult<bool> {
        verify_password(password, &self.password_hash)
    }
}

/// User repository trait
///
/// Abstracts storage operations for users. Implementations are injected
/// into services as explicit dependencies; there is no ambient connection.
pub trait UserRepository: Send + Sync {
    /// Find a user by their ID
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>>;

    /// Find a user by their login name
    fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;

    /// Check if a username is already registered
    fn username_exists(&self, username: &str) -> AuthResult<bool>;

    /// All users, in insertion order
    fn all(&self) -> AuthResult<Vec<User>>;

    /// Create a new user
    fn create(&self, user: &User) -> AuthResult<()>;

    /// Update an existing user
    fn update(&self, user: &User) -> AuthResult<()>;
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: std::sync::RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    fn username_exists(&self, username: &str) -> AuthResult<bool> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;
        Ok(users.iter().any(|u| u.username == username))
    }

    fn all(&self) -> AuthResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;
        Ok(users.clone())
    }

    fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::UsernameTaken);
        }

        users.push(user.clone());
        Ok(())
    }

    fn update(&self, user: &User) -> AuthResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::StorageError("Lock poisoned".to_string()))?;

        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
            Ok(())
        } else {
            Err(AuthError::StorageError("User not found".to_string()))
        }
    }
}
