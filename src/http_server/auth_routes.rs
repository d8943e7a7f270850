//! Auth HTTP Routes
//!
//! Token issuance for the blog API. Credentials are checked against the
//! bootstrapped user set; a successful login returns the bearer token the
//! mutating blog endpoints require.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use crate::auth::LoginRequest;
use crate::observability::{Logger, Severity};

use super::server::ApiState;
use super::{auth_error_response, ErrorResponse};

/// Login routes with shared state
pub fn auth_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", post(login_handler))
        .with_state(state)
}

/// Login response body
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
    pub expires_in: i64,
}

/// Login handler
async fn login_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.auth.login(&request) {
        Ok((user, token)) => {
            Logger::log(Severity::Info, "login", &[("username", &user.username)]);
            Ok(Json(LoginResponse {
                token,
                username: user.username,
                name: user.name,
                expires_in: state.auth.token_ttl_seconds(),
            }))
        }
        Err(e) => {
            if e.is_client_error() {
                Logger::log(
                    Severity::Warn,
                    "login_rejected",
                    &[("username", &request.username)],
                );
            }
            Err(auth_error_response(e))
        }
    }
}
