//! Dashboard service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum DashboardServiceError {
    #[error("hotel not found")]
    HotelNotFound,

    #[error("storage error")]
    Store(#[from] StoreError),
}
