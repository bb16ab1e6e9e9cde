//! Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::hotels::HotelsServiceError;

use crate::validation::into_bad_request;

pub(crate) fn into_status_error(error: HotelsServiceError) -> StatusError {
    match error {
        HotelsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A hotel with this hotelier email already exists")
        }
        HotelsServiceError::InvalidData(errors) => into_bad_request(&errors),
        HotelsServiceError::NotFound => StatusError::not_found().brief("Hotel not found"),
        HotelsServiceError::Store(source) => {
            error!("hotel storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
