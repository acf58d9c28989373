//! Request interceptors.

pub mod auth;
