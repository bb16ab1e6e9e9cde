//! Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::domain::dashboard::DashboardServiceError;

pub(crate) fn into_status_error(error: DashboardServiceError) -> StatusError {
    match error {
        DashboardServiceError::HotelNotFound => StatusError::not_found().brief("Hotel not found"),
        DashboardServiceError::Store(source) => {
            error!("failed to aggregate dashboard: {source}");

            StatusError::internal_server_error()
        }
    }
}
