//! # pethub_api
//!
//! HTTP API library for PetHub.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;

use axum::Router;
use axum::routing::{get, post, put};
use pethub_core::store::DocStore;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, health, pets};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle.
    pub store: DocStore,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `pethub_core::migrate::migrate()` which owns the migration
/// files.
pub async fn migrate(pool: &sqlx::PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    pethub_core::migrate::migrate(pool).await
}

/// Builds the axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route("/health", get(health::health_handler))
        .route("/login", post(auth::login_handler))
        .route("/register", post(auth::register_handler))
        .route("/pets", get(pets::list_pets_handler))
        .route("/pets/{id}", get(pets::get_pet_handler));

    // Admin routes (require a token carrying the admin role)
    let admin = Router::new()
        .route("/admin/pets", post(pets::create_pet_handler))
        .route(
            "/admin/pets/{id}",
            put(pets::update_pet_handler).delete(pets::delete_pet_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        .merge(public)
        .merge(admin)
        .layer(cors)
        .with_state(state)
}
