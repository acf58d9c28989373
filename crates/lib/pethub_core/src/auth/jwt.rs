//! Session token issue and validation.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::info;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Session token lifetime: 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

/// Issue a signed session token (HS256, 7-day expiry).
pub fn issue_token(user_id: &str, role: &str, secret: &[u8]) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Validate a session token, returning its claims.
///
/// Expiry is reported separately from signature/format failures; both deny
/// access. Pure and synchronous, no I/O.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Resolve the signing secret: env var `JWT_SECRET` → persisted file.
///
/// Loaded once at process start; the resulting config value is immutable
/// for the life of the process.
pub fn resolve_signing_secret() -> String {
    if let Ok(secret) = std::env::var("JWT_SECRET")
        && !secret.is_empty()
    {
        return secret;
    }
    // Generate and persist
    let secret_path = signing_secret_path();
    if let Ok(existing) = std::fs::read_to_string(&secret_path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = secret_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(&secret_path, &secret);
    info!(path = %secret_path.display(), "generated new signing secret");
    secret
}

/// Path to the persisted signing secret file.
fn signing_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pethub")
        .join("jwt-secret")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";

    #[test]
    fn issued_token_validates_with_matching_claims() {
        let token = issue_token("user-42", "admin", SECRET).expect("issue");
        let claims = validate_token(&token, SECRET).expect("validate");
        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
        // 7-day expiry window (one second of slack for the test itself)
        assert!((claims.exp - claims.iat - TOKEN_TTL_DAYS * 24 * 3600).abs() <= 1);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "user-42".into(),
            role: "admin".into(),
            exp: (now - Duration::hours(1)).timestamp(),
            iat: (now - Duration::days(8)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("encode");

        let err = validate_token(&token, SECRET).expect_err("must be rejected");
        assert!(matches!(err, AuthError::TokenExpired), "{err}");
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid_not_expired() {
        let token = issue_token("user-42", "admin", b"another-secret").expect("issue");
        let err = validate_token(&token, SECRET).expect_err("must be rejected");
        assert!(matches!(err, AuthError::TokenInvalid(_)), "{err}");
    }

    #[test]
    fn garbage_token_is_invalid() {
        let err = validate_token("not.a.token", SECRET).expect_err("must be rejected");
        assert!(matches!(err, AuthError::TokenInvalid(_)), "{err}");
    }
}
