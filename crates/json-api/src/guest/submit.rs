//! Guest Booking Submission Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use innkeep_app::domain::guest_links::{GuestLinksServiceError, records::GuestLinkUuid};

use crate::{
    extensions::*,
    guest::{
        ALREADY_COMPLETED, BOOKING_MISSING, BOOKING_UNAVAILABLE, COMPLETED, LINK_NOT_FOUND,
        SUBMIT_FAILED,
        responses::{GuestSubmissionRequest, SubmissionResponse},
    },
    observability::{GuestCompletionOutcome, record_guest_completion},
    state::State,
    validation,
};

/// Guest Booking Submission Handler
///
/// Completes a booking from the guest form. A link can be completed once.
#[endpoint(
    tags("guest"),
    summary = "Submit Guest Booking",
    responses(
        (status_code = StatusCode::OK, description = "Outcome of the submission"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid guest details"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    link: PathParam<String>,
    json: JsonBody<GuestSubmissionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubmissionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Ok(link) = link.into_inner().parse::<Uuid>().map(GuestLinkUuid::from_uuid) else {
        record_guest_completion(GuestCompletionOutcome::NotFound);

        return Ok(Json(SubmissionResponse::failed(LINK_NOT_FOUND)));
    };

    let result = state
        .app
        .guest_links
        .submit_guest_booking(link, json.into_inner().into())
        .await;

    let (outcome, response) = match result {
        Ok(booking) => {
            info!(link = %link, booking = %booking.id, "guest completed booking");

            (
                GuestCompletionOutcome::Completed,
                SubmissionResponse {
                    success: true,
                    message: COMPLETED.to_string(),
                    booking_id: Some(booking.id.into_uuid()),
                },
            )
        }
        Err(GuestLinksServiceError::LinkNotFound) => {
            warn!(link = %link, "guest link not found");

            (
                GuestCompletionOutcome::NotFound,
                SubmissionResponse::failed(LINK_NOT_FOUND),
            )
        }
        Err(GuestLinksServiceError::AlreadyCompleted) => {
            warn!(link = %link, "guest link already completed");

            (
                GuestCompletionOutcome::AlreadyCompleted,
                SubmissionResponse::failed(ALREADY_COMPLETED),
            )
        }
        Err(GuestLinksServiceError::BookingMissing) => (
            GuestCompletionOutcome::NotFound,
            SubmissionResponse::failed(BOOKING_MISSING),
        ),
        Err(GuestLinksServiceError::BookingUnavailable) => (
            GuestCompletionOutcome::Rejected,
            SubmissionResponse::failed(BOOKING_UNAVAILABLE),
        ),
        Err(GuestLinksServiceError::InvalidData(errors)) => {
            res.status_code(StatusCode::BAD_REQUEST);

            (
                GuestCompletionOutcome::Rejected,
                SubmissionResponse::failed(validation::messages(&errors).join(" ")),
            )
        }
        Err(error @ GuestLinksServiceError::Store(_)) => {
            error!(link = %link, "failed to complete guest booking: {error}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            (
                GuestCompletionOutcome::Failed,
                SubmissionResponse::failed(SUBMIT_FAILED),
            )
        }
    };

    record_guest_completion(outcome);

    Ok(Json(response))
}
