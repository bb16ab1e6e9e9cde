//! Guest links service errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::store::{Collection, StoreError};

#[derive(Debug, Error)]
pub enum GuestLinksServiceError {
    #[error("guest link not found")]
    LinkNotFound,

    #[error("guest link already completed")]
    AlreadyCompleted,

    #[error("hotel or booking for guest link not found")]
    BookingMissing,

    #[error("booking is no longer awaiting the guest")]
    BookingUnavailable,

    #[error("invalid guest submission")]
    InvalidData(#[from] ValidationErrors),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for GuestLinksServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::PreconditionFailed {
                collection: Collection::GuestLinks,
                ..
            } => Self::AlreadyCompleted,
            StoreError::PreconditionFailed { .. } => Self::BookingUnavailable,
            StoreError::NotFound {
                collection: Collection::GuestLinks,
                ..
            } => Self::LinkNotFound,
            StoreError::NotFound { .. } => Self::BookingMissing,
            StoreError::AlreadyExists { .. }
            | StoreError::Serialization(_)
            | StoreError::Sql(_) => Self::Store(error),
        }
    }
}
