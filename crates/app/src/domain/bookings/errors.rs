//! Bookings service errors.

use thiserror::Error;
use validator::ValidationErrors;

use crate::{domain::bookings::records::BookingStatus, store::StoreError};

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("hotel not found")]
    HotelNotFound,

    #[error("booking not found")]
    NotFound,

    #[error("booking cannot move from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("booking was modified concurrently")]
    Conflict,

    #[error("invalid booking data")]
    InvalidData(#[from] ValidationErrors),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for BookingsServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::PreconditionFailed { .. } => Self::Conflict,
            StoreError::NotFound { .. } => Self::NotFound,
            StoreError::AlreadyExists { .. }
            | StoreError::Serialization(_)
            | StoreError::Sql(_) => Self::Store(error),
        }
    }
}
