//! Service layer — flows shared by the request handlers.

pub mod auth;
