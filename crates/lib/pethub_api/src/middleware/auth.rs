//! Access control middleware — Bearer token extraction, verification, and
//! role enforcement.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::AppError;
use pethub_core::auth::jwt::validate_token;
use pethub_core::models::auth::TokenClaims;

/// Key used to store the verified `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Interceptor for admin-only routes.
pub async fn require_admin(
    state: State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role("admin", state, request, next).await
}

/// Extracts `Authorization: Bearer <token>`, validates the token, and
/// requires the claim role to equal `role` exactly. Any failure
/// short-circuits before the handler runs; on success the claims are
/// injected into request extensions.
pub async fn require_role(
    role: &str,
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))?;

    let claims =
        validate_token(token, state.config.jwt_secret.as_bytes()).map_err(AppError::from)?;

    if claims.role != role {
        return Err(AppError::Forbidden("Insufficient role".into()));
    }

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
