//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.
//!
//! This is the unified entry point for the blog API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::crypto::PasswordPolicy;
use crate::auth::{AuthService, InMemoryUserRepository};
use crate::blog::{BlogService, InMemoryBlogRepository};
use crate::observability::{Logger, Severity};

use super::auth_routes::auth_routes;
use super::blog_routes::blog_routes;
use super::config::ServerConfig;
use super::user_routes::user_routes;

/// Shared API state: the services every handler delegates to.
///
/// Repositories are created here and injected as explicit `Arc` dependencies;
/// nothing reaches for process-global connection state.
pub struct ApiState {
    pub blogs: BlogService<InMemoryBlogRepository, InMemoryUserRepository>,
    pub auth: AuthService<InMemoryUserRepository>,
}

impl ApiState {
    /// Create state with empty stores
    pub fn new(config: &ServerConfig) -> Self {
        let blog_repo = Arc::new(InMemoryBlogRepository::new());
        let user_repo = Arc::new(InMemoryUserRepository::new());

        Self {
            blogs: BlogService::new(blog_repo, Arc::clone(&user_repo)),
            auth: AuthService::new(
                user_repo,
                config.jwt.to_jwt_config(),
                PasswordPolicy::default(),
            ),
        }
    }

    /// Seed the configured bootstrap users.
    ///
    /// A rejected user (weak password, duplicate username) is logged and
    /// skipped; the rest of the set still loads.
    pub fn bootstrap_users(&self, config: &ServerConfig) {
        for user in &config.users {
            match self.auth.create_user(&user.username, &user.name, &user.password) {
                Ok(created) => {
                    Logger::log(
                        Severity::Info,
                        "user_bootstrapped",
                        &[("username", &created.username)],
                    );
                }
                Err(e) => {
                    Logger::log_stderr(
                        Severity::Warn,
                        "user_bootstrap_skipped",
                        &[("username", &user.username), ("reason", &e.to_string())],
                    );
                }
            }
        }
    }
}

/// HTTP server for the blog API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let state = Arc::new(ApiState::new(&config));
        state.bootstrap_users(&config);

        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, state: Arc<ApiState>) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Blog CRUD under /api/blogs
            .nest("/api/blogs", blog_routes(Arc::clone(&state)))
            // Token issuance under /api/login
            .nest("/api/login", auth_routes(Arc::clone(&state)))
            // User listing under /api/users
            .nest("/api/users", user_routes(state))
            // Apply CORS middleware
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid socket address")
        })?;

        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Health
// ==================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
