//! # pethub_core
//!
//! Core domain logic for PetHub.

pub mod auth;
pub mod migrate;
pub mod models;
pub mod pets;
pub mod store;
pub mod users;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
