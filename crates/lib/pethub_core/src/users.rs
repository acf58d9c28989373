//! User collection queries.

use serde_json::json;

use crate::models::auth::StoredUser;
use crate::store::{DocId, DocStore, Result};

/// Collection backing user documents.
pub const COLLECTION: &str = "users";

/// Look up a user by exact username, returning the storage key and the
/// stored document.
pub async fn find_by_username(
    store: &DocStore,
    username: &str,
) -> Result<Option<(DocId, StoredUser)>> {
    let filter = json!({ "username": username });
    let row = store.collection(COLLECTION).find_one(&filter).await?;
    match row {
        None => Ok(None),
        Some((id, doc)) => Ok(Some((id, serde_json::from_value(doc)?))),
    }
}

/// Insert a user document unconditionally, returning the storage key.
///
/// The caller must supply an already-hashed password. Username uniqueness
/// is enforced by the store's unique index.
pub async fn create(store: &DocStore, user: &StoredUser) -> Result<DocId> {
    let doc = serde_json::to_value(user)?;
    store.collection(COLLECTION).insert_one(&doc).await
}
