//! Blog HTTP Routes
//!
//! Endpoints for listing, creating, reading, updating, and deleting blogs.
//! Creation and deletion require a bearer token; the ownership check runs
//! before the store is touched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};

use crate::blog::{Blog, BlogWithOwner, CreateBlogRequest, UpdateBlogRequest};
use crate::observability::{Logger, Severity};

use super::server::ApiState;
use super::{blog_error_response, ErrorResponse};

/// Blog routes with shared state
pub fn blog_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(list_blogs_handler).post(create_blog_handler))
        .route(
            "/:id",
            get(get_blog_handler)
                .put(update_blog_handler)
                .delete(delete_blog_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List all blogs with owner identity resolved for display
async fn list_blogs_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BlogWithOwner>>, (StatusCode, Json<ErrorResponse>)> {
    state
        .blogs
        .list()
        .map(Json)
        .map_err(blog_error_response)
}

/// Create a blog owned by the authenticated requester
async fn create_blog_handler(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>), (StatusCode, Json<ErrorResponse>)> {
    let requester = authenticate(&state, &headers).map_err(blog_error_response)?;

    match state.blogs.create(requester, request) {
        Ok(blog) => {
            Logger::log(
                Severity::Info,
                "blog_created",
                &[("id", &blog.id.to_string()), ("title", &blog.title)],
            );
            Ok((StatusCode::CREATED, Json(blog)))
        }
        Err(e) => {
            if e.is_client_error() {
                Logger::log(
                    Severity::Warn,
                    "blog_create_rejected",
                    &[("reason", &e.to_string())],
                );
            }
            Err(blog_error_response(e))
        }
    }
}

/// Fetch a single blog
async fn get_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, (StatusCode, Json<ErrorResponse>)> {
    state.blogs.get(&id).map(Json).map_err(blog_error_response)
}

/// Partially update a blog (no ownership check on this endpoint)
async fn update_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBlogRequest>,
) -> Result<Json<Blog>, (StatusCode, Json<ErrorResponse>)> {
    state
        .blogs
        .update(&id, request)
        .map(Json)
        .map_err(blog_error_response)
}

/// Delete a blog; owner-gated
async fn delete_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let requester = authenticate(&state, &headers).map_err(blog_error_response)?;

    match state.blogs.delete(requester, &id) {
        Ok(()) => {
            Logger::log(Severity::Info, "blog_deleted", &[("id", &id)]);
            Ok(StatusCode::OK)
        }
        Err(e) => {
            if e.is_client_error() {
                Logger::log(
                    Severity::Warn,
                    "blog_delete_rejected",
                    &[("id", &id), ("reason", &e.to_string())],
                );
            }
            Err(blog_error_response(e))
        }
    }
}

/// Resolve the requester from the Authorization header
fn authenticate(state: &ApiState, headers: &HeaderMap) -> Result<uuid::Uuid, crate::blog::BlogError> {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok());

    Ok(state.auth.authenticate(authorization)?)
}
