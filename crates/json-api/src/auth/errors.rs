//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use innkeep_app::auth::AuthServiceError;

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid credentials.";

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials | AuthServiceError::NotFound => {
            StatusError::unauthorized().brief(INVALID_CREDENTIALS)
        }
        AuthServiceError::Token(source) => {
            error!("failed to issue access token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Store(source) => {
            error!("failed to log in: {source}");

            StatusError::internal_server_error()
        }
    }
}
