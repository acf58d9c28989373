//! Authentication service — login and registration flows.

use tracing::info;

use pethub_core::auth::jwt::issue_token;
use pethub_core::auth::password::{hash_password, verify_password};
use pethub_core::models::auth::StoredUser;
use pethub_core::store::DocStore;
use pethub_core::users;

use crate::error::{AppError, AppResult};

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Authenticate with username + password, returning a signed session token.
///
/// Unknown usernames and wrong passwords produce the same error so the
/// response never reveals whether the account exists.
pub async fn login(
    store: &DocStore,
    username: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<String> {
    let row = users::find_by_username(store, username).await?;

    let (user_id, user) = match row {
        None => return Err(AppError::Unauthorized("Invalid username or password".into())),
        Some(r) => r,
    };

    if !verify_password(password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid username or password".into()));
    }

    let token = issue_token(&user_id.to_string(), &user.role, jwt_secret)?;
    Ok(token)
}

/// Register a new user account.
///
/// The password is hashed before anything is persisted; duplicate
/// usernames are rejected by the store's unique index.
pub async fn register(
    store: &DocStore,
    username: &str,
    password: &str,
    role: &str,
) -> AppResult<()> {
    if username.trim().is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".into()));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".into(),
        ));
    }

    let password_hash = hash_password(password)?;
    let user = StoredUser {
        username: username.to_string(),
        password_hash,
        role: role.to_string(),
    };
    users::create(store, &user).await?;
    info!(username, "user registered");
    Ok(())
}
