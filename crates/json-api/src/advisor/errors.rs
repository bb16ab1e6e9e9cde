//! Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use innkeep_app::content::ContentGenerationError;

use crate::validation::into_bad_request;

pub(crate) fn into_status_error(error: ContentGenerationError) -> StatusError {
    match error {
        ContentGenerationError::InvalidInput(errors) => into_bad_request(&errors),
        ContentGenerationError::RateLimited => {
            warn!("content generation rate limited");

            StatusError::too_many_requests().brief("Content generation is busy, try again later")
        }
        ContentGenerationError::Unauthorized
        | ContentGenerationError::RequestFailed(_)
        | ContentGenerationError::ResponseParseFailed(_)
        | ContentGenerationError::ApiError { .. }
        | ContentGenerationError::EmptyResponse => {
            error!("content generation failed: {error}");

            StatusError::bad_gateway().brief("Content generation failed")
        }
    }
}
