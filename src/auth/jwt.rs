//! # JWT Token Management
//!
//! Bearer token generation and validation for the blog API.
//!
//! ## Invariants
//! - AUTH-JWT1: Stateless validation (no store lookup)
//! - AUTH-JWT2: No secrets in token (only user id and username)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::user::User;

/// JWT claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,

    /// User's login name
    pub username: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing (256-bit minimum recommended)
    pub secret: String,

    /// Access token lifetime
    pub token_ttl: Duration,

    /// Issuer identifier
    pub issuer: String,

    /// Audience identifier
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            token_ttl: Duration::hours(1),
            issuer: "bloglist".to_string(),
            audience: "bloglist".to_string(),
        }
    }
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access token for a user
    ///
    /// # Invariant
    /// AUTH-JWT2: No secrets in token (only user id and username)
    pub fn generate_token(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + self.config.token_ttl;

        let claims = JwtClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate an access token and extract claims
    ///
    /// # Invariant
    /// AUTH-JWT1: Validation is stateless (no store lookup required)
    pub fn validate_token(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extract user ID from validated claims
    pub fn get_user_id(claims: &JwtClaims) -> AuthResult<Uuid> {
        Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)
    }

    /// Number of seconds a freshly issued token is valid for
    pub fn ttl_seconds(&self) -> i64 {
        self.config.token_ttl.num_seconds()
    }
}
