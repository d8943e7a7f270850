//! # Auth Errors
//!
//! Error types for the authentication module.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and authorization errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Credential Errors
    // ==================

    /// Wrong username or password (generic - don't leak which one)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username already registered
    #[error("Username already taken")]
    UsernameTaken,

    /// Password does not meet requirements
    #[error("Password does not meet requirements: {0}")]
    WeakPassword(String),

    // ==================
    // Token Errors
    // ==================

    /// Request carries no bearer token
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Bearer token is malformed
    #[error("Malformed token")]
    MalformedToken,

    /// Bearer token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Token signature is invalid
    #[error("Invalid token signature")]
    InvalidSignature,

    // ==================
    // Internal Errors
    // ==================

    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Token generation failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            AuthError::WeakPassword(_) => 400,

            // 401 Unauthorized
            AuthError::InvalidCredentials => 401,
            AuthError::AuthenticationRequired => 401,
            AuthError::MalformedToken => 401,
            AuthError::TokenExpired => 401,
            AuthError::InvalidSignature => 401,

            // 409 Conflict
            AuthError::UsernameTaken => 409,

            // 500 Internal Server Error
            AuthError::HashingFailed => 500,
            AuthError::TokenGenerationFailed => 500,
            AuthError::StorageError(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
