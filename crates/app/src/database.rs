//! Database connection management

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{PgPool, migrate::MigrateError};
use uuid::Uuid;

use crate::store::{Collection, DocumentStore, Query, StoreError, WriteBatch};

/// Typed access to the document store.
#[derive(Clone)]
pub struct Db {
    store: Arc<dyn DocumentStore>,
}

impl Db {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Fetch and decode a document.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails or the document cannot be decoded.
    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: impl Into<Uuid>,
    ) -> Result<Option<T>, StoreError> {
        self.store
            .get(collection, id.into())
            .await?
            .map(|document| serde_json::from_value(Value::Object(document)))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Run a query and decode every matching document.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails or any document cannot be decoded.
    pub async fn query<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>, StoreError> {
        self.store
            .query(query)
            .await?
            .into_iter()
            .map(|document| serde_json::from_value(Value::Object(document)))
            .collect::<Result<Vec<T>, _>>()
            .map_err(StoreError::from)
    }

    /// Commit a batch atomically.
    ///
    /// # Errors
    ///
    /// Returns an error when any operation in the batch fails; nothing is written.
    pub async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        self.store.commit(batch).await
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish_non_exhaustive()
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
