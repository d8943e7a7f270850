//! # HTTP Server Module
//!
//! Axum-based HTTP surface for the blog API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/blogs` - Blog CRUD (create and delete require a bearer token)
//! - `/api/login` - Token issuance
//! - `/api/users` - Read-only user listing

pub mod auth_routes;
pub mod blog_routes;
pub mod config;
pub mod server;
pub mod user_routes;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::auth::AuthError;
use crate::blog::BlogError;

pub use config::{BootstrapUser, JwtSettings, ServerConfig};
pub use server::{ApiState, HttpServer};

/// Error body shared by all endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Map a blog error to its HTTP response
pub(crate) fn blog_error_response(err: BlogError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}

/// Map an auth error to its HTTP response
pub(crate) fn auth_error_response(err: AuthError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}
