//! Hotels service errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum HotelsServiceError {
    #[error("hotel already exists")]
    AlreadyExists,

    #[error("hotel not found")]
    NotFound,

    #[error("invalid hotel data")]
    InvalidData(#[from] ValidationErrors),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for HotelsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::AlreadyExists { .. } => Self::AlreadyExists,
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::PreconditionFailed { .. }
            | StoreError::Serialization(_)
            | StoreError::Sql(_) => Self::Store(error),
        }
    }
}
