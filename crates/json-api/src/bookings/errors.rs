//! Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::bookings::BookingsServiceError;

use crate::validation::into_bad_request;

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::HotelNotFound => StatusError::not_found().brief("Hotel not found"),
        BookingsServiceError::NotFound => StatusError::not_found().brief("Booking not found"),
        BookingsServiceError::InvalidTransition { from, to } => {
            StatusError::conflict().brief(format!("Booking cannot move from {from} to {to}"))
        }
        BookingsServiceError::Conflict => {
            StatusError::conflict().brief("Booking was modified concurrently")
        }
        BookingsServiceError::InvalidData(errors) => into_bad_request(&errors),
        BookingsServiceError::Store(source) => {
            error!("booking storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
