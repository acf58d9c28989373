//! API server configuration.

use pethub_core::auth::jwt::resolve_signing_secret;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// Document database connection URL.
    pub database_url: String,
    /// Session token signing secret. Set once at process start.
    pub jwt_secret: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default                            |
    /// |----------------|------------------------------------|
    /// | `BIND_ADDR`    | `127.0.0.1:8080`                   |
    /// | `DATABASE_URL` | `postgres://localhost:5432/pethub` |
    /// | `JWT_SECRET`   | generated & persisted to file      |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/pethub".into()),
            jwt_secret: resolve_signing_secret(),
        }
    }
}
