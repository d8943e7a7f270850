//! # Blog Errors
//!
//! Error taxonomy for blog operations. Validation, not-found, and
//! authorization failures are distinct variants so handlers can surface
//! distinct status codes; store failures propagate as 500 and are never
//! masked as client errors.

use thiserror::Error;

use crate::auth::AuthError;

/// Result type for blog operations
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog operation errors
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    // ==================
    // Validation Errors
    // ==================

    /// Title missing or empty on creation
    #[error("title is required")]
    MissingTitle,

    /// Url missing or empty on creation
    #[error("url is required")]
    MissingUrl,

    /// Identifier is not a validly formed id
    #[error("malformed blog id: {0}")]
    MalformedId(String),

    // ==================
    // Lookup Errors
    // ==================

    /// No blog with the given id
    #[error("blog not found")]
    NotFound,

    // ==================
    // Authorization Errors
    // ==================

    /// Requester is not the blog's owner
    #[error("Authentication failed")]
    NotOwner,

    /// Token resolves to a user that no longer exists
    #[error("unknown user")]
    UnknownUser,

    /// Token-level failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    // ==================
    // Internal Errors
    // ==================

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl BlogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            BlogError::MissingTitle => 400,
            BlogError::MissingUrl => 400,
            BlogError::MalformedId(_) => 400,

            // 401 Unauthorized
            BlogError::NotOwner => 401,
            BlogError::UnknownUser => 401,

            // 404 Not Found
            BlogError::NotFound => 404,

            // Delegated
            BlogError::Auth(e) => e.status_code(),

            // 500 Internal Server Error
            BlogError::Storage(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
