//! Document store adapter.
//!
//! Maps named collections onto PostgreSQL tables of `(id UUID, doc JSONB)`
//! rows. Filters are JSON documents matched by containment, so an empty
//! filter matches every document in a collection.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use uuid::Uuid;

/// Maximum time to wait when acquiring a pool connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the document store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("malformed document id: {0}")]
    InvalidId(String),

    #[error("store error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("document decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage key of a document.
///
/// Callers must go through [`DocId::parse`] before building a query; a
/// malformed identifier never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocId(Uuid);

impl DocId {
    /// Parse a document id from its string form.
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::from_str(raw)
            .map(DocId)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Handle to the document database. Cheap to clone; all clones share one
/// connection pool.
#[derive(Clone)]
pub struct DocStore {
    pool: PgPool,
}

impl DocStore {
    /// Open a connection pool to the document database.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access a named collection.
    pub fn collection(&self, name: &'static str) -> Collection {
        Collection {
            pool: self.pool.clone(),
            name,
        }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// A named collection of JSON documents.
///
/// `name` is interpolated into SQL and must be one of the statically-known
/// collection tables created by the migrations.
#[derive(Clone)]
pub struct Collection {
    pool: PgPool,
    name: &'static str,
}

impl Collection {
    /// Fetch a document by storage key.
    pub async fn find_by_id(&self, id: &DocId) -> Result<Option<Value>> {
        let sql = format!("SELECT doc FROM {} WHERE id = $1", self.name);
        let doc = sqlx::query_scalar::<_, Value>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc)
    }

    /// Fetch the first document matching the filter, with its key.
    pub async fn find_one(&self, filter: &Value) -> Result<Option<(DocId, Value)>> {
        let sql = format!("SELECT id, doc FROM {} WHERE doc @> $1 LIMIT 1", self.name);
        let row = sqlx::query_as::<_, (Uuid, Value)>(&sql)
            .bind(filter)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(id, doc)| (DocId(id), doc)))
    }

    /// Fetch all documents matching the filter. An empty filter matches
    /// every document.
    pub async fn find(&self, filter: &Value) -> Result<Vec<Value>> {
        let sql = format!("SELECT doc FROM {} WHERE doc @> $1", self.name);
        let docs = sqlx::query_scalar::<_, Value>(&sql)
            .bind(filter)
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    /// Insert a document, returning its store-generated key.
    pub async fn insert_one(&self, doc: &Value) -> Result<DocId> {
        let sql = format!("INSERT INTO {} (doc) VALUES ($1) RETURNING id", self.name);
        let id = sqlx::query_scalar::<_, Uuid>(&sql)
            .bind(doc)
            .fetch_one(&self.pool)
            .await?;
        Ok(DocId(id))
    }

    /// Merge `fields` into the document with the given key, returning the
    /// number of documents matched.
    pub async fn merge_one(&self, id: &DocId, fields: &Value) -> Result<u64> {
        let sql = format!("UPDATE {} SET doc = doc || $2 WHERE id = $1", self.name);
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .bind(fields)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the document with the given key, returning the number deleted.
    pub async fn delete_one(&self, id: &DocId) -> Result<u64> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.name);
        let result = sqlx::query(&sql)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
