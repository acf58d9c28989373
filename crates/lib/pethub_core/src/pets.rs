//! Pet collection queries.

use thiserror::Error;

use crate::models::pet::{Pet, PetFields, PetFilter};
use crate::store::{DocId, DocStore, StoreError};

/// Collection backing pet documents.
pub const COLLECTION: &str = "pets";

/// Pet repository errors.
#[derive(Debug, Error)]
pub enum PetError {
    #[error("pet not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for pet repository operations.
pub type Result<T> = std::result::Result<T, PetError>;

/// Fetch a pet by storage key.
///
/// A malformed key cannot name any stored document, so it reports
/// `NotFound` without a storage round-trip.
pub async fn get(store: &DocStore, id: &str) -> Result<Pet> {
    let id = DocId::parse(id).map_err(|_| PetError::NotFound)?;
    let doc = store
        .collection(COLLECTION)
        .find_by_id(&id)
        .await?
        .ok_or(PetError::NotFound)?;
    Ok(serde_json::from_value(doc).map_err(StoreError::from)?)
}

/// List pets matching the filter. An empty filter returns every pet.
pub async fn list(store: &DocStore, filter: &PetFilter) -> Result<Vec<Pet>> {
    let docs = store.collection(COLLECTION).find(&filter.to_doc()).await?;
    let mut pets = Vec::with_capacity(docs.len());
    for doc in docs {
        pets.push(serde_json::from_value(doc).map_err(StoreError::from)?);
    }
    Ok(pets)
}

/// Insert a pet unconditionally.
pub async fn create(store: &DocStore, pet: &Pet) -> Result<()> {
    let doc = serde_json::to_value(pet).map_err(StoreError::from)?;
    store.collection(COLLECTION).insert_one(&doc).await?;
    Ok(())
}

/// Replace the mutable fields of the pet with the given storage key.
///
/// The key is validated before any query; zero matched documents is
/// `NotFound`.
pub async fn update(store: &DocStore, id: &str, fields: &PetFields) -> Result<()> {
    let id = DocId::parse(id)?;
    let fields = serde_json::to_value(fields).map_err(StoreError::from)?;
    let matched = store.collection(COLLECTION).merge_one(&id, &fields).await?;
    if matched == 0 {
        return Err(PetError::NotFound);
    }
    Ok(())
}

/// Delete the pet with the given storage key.
pub async fn delete(store: &DocStore, id: &str) -> Result<()> {
    let id = DocId::parse(id)?;
    let deleted = store.collection(COLLECTION).delete_one(&id).await?;
    if deleted == 0 {
        return Err(PetError::NotFound);
    }
    Ok(())
}
