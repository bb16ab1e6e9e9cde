//! Document store errors.

use sqlx::Error;
use thiserror::Error;
use uuid::Uuid;

use crate::store::Collection;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {collection}/{id} not found")]
    NotFound { collection: Collection, id: Uuid },

    #[error("document {collection}/{id} already exists")]
    AlreadyExists { collection: Collection, id: Uuid },

    #[error("precondition failed for {collection}/{id}")]
    PreconditionFailed { collection: Collection, id: Uuid },

    #[error("document serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StoreError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
