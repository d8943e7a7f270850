//! User HTTP Routes
//!
//! Read-only listing of the bootstrapped users and the blog ids they own.
//! There is no HTTP user creation; identity management is external.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::auth::User;

use super::server::ApiState;
use super::{auth_error_response, ErrorResponse};

/// User routes with shared state
pub fn user_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(list_users_handler))
        .with_state(state)
}

/// List users; password hashes are never serialized
async fn list_users_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<User>>, (StatusCode, Json<ErrorResponse>)> {
    state
        .auth
        .users()
        .map(Json)
        .map_err(auth_error_response)
}
