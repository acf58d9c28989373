//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
///
/// Carries only the bcrypt hash; the plaintext password never reaches this
/// layer and the hash never leaves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// Claims embedded in signed session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user id (standard JWT `sub` claim).
    pub sub: String,
    /// Role tag controlling access to admin-only operations.
    pub role: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
