//! HTTP Server Configuration
//!
//! Configuration for the API server: bind address, CORS, token settings,
//! and the users bootstrapped at startup. Identity management lives outside
//! this service, so the user set is handed in through configuration rather
//! than an HTTP surface.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::JwtConfig;

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3003)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Bearer token settings
    #[serde(default)]
    pub jwt: JwtSettings,

    /// Users seeded into the store at startup
    #[serde(default)]
    pub users: Vec<BootstrapUser>,
}

/// Token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing (256-bit minimum recommended)
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Token lifetime in seconds (default: one hour)
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,
}

/// A user provisioned from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapUser {
    pub username: String,
    pub name: String,
    pub password: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3003
}

fn default_secret() -> String {
    "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string()
}

fn default_token_ttl_secs() -> i64 {
    3600
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl JwtSettings {
    /// Build the auth module's JWT configuration
    pub fn to_jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.secret.clone(),
            token_ttl: Duration::seconds(self.token_ttl_secs),
            ..JwtConfig::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            jwt: JwtSettings::default(),
            users: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
