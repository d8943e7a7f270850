//! # Cryptographic Utilities
//!
//! Password hashing for bootstrap users and login.
//!
//! ## Invariants
//! - AUTH-S1: Passwords only stored as Argon2id hashes
//! - AUTH-S2: Verification never reveals why a credential failed

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::errors::{AuthError, AuthResult};

/// Password requirements configuration
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_number: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 3,
            require_number: false,
        }
    }
}

impl PasswordPolicy {
    /// Validate a password against this policy
    pub fn validate(&self, password: &str) -> AuthResult<()> {
        validate_password(password, self)
    }
}

/// Validate password against policy
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> AuthResult<()> {
    if password.len() < policy.min_length {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {} characters",
            policy.min_length
        )));
    }

    if policy.require_number && !password.chars().any(|c| c.is_numeric()) {
        return Err(AuthError::WeakPassword(
            "Password must contain at least one number".to_string(),
        ));
    }

    Ok(())
}

/// Hash a password using Argon2id
///
/// # Invariant
/// AUTH-S1: Passwords only stored as Argon2id hashes
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against a stored Argon2id hash
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::HashingFailed)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
