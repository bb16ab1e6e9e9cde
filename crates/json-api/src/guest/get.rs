//! Guest Booking View Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::{error, warn};
use uuid::Uuid;

use innkeep_app::domain::guest_links::{GuestLinksServiceError, records::GuestLinkUuid};

use crate::{
    extensions::*,
    guest::{
        ALREADY_COMPLETED, BOOKING_MISSING, BOOKING_UNAVAILABLE, LINK_NOT_FOUND, LOAD_FAILED,
        responses::GuestBookingEnvelope,
    },
    state::State,
};

/// Guest Booking View Handler
///
/// Returns the hotel and booking behind an open guest link.
#[endpoint(
    tags("guest"),
    summary = "Get Guest Booking",
    responses(
        (status_code = StatusCode::OK, description = "Booking, or the reason the link cannot be used"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    link: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<GuestBookingEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Ok(link) = link.into_inner().parse::<Uuid>().map(GuestLinkUuid::from_uuid) else {
        return Ok(Json(GuestBookingEnvelope::failed(LINK_NOT_FOUND)));
    };

    let envelope = match state.app.guest_links.get_guest_booking(link).await {
        Ok(view) => GuestBookingEnvelope {
            success: true,
            message: None,
            data: Some(view.into()),
        },
        Err(GuestLinksServiceError::LinkNotFound) => {
            warn!(link = %link, "guest link not found");

            GuestBookingEnvelope::failed(LINK_NOT_FOUND)
        }
        Err(GuestLinksServiceError::AlreadyCompleted) => {
            GuestBookingEnvelope::failed(ALREADY_COMPLETED)
        }
        Err(GuestLinksServiceError::BookingMissing) => {
            GuestBookingEnvelope::failed(BOOKING_MISSING)
        }
        Err(GuestLinksServiceError::BookingUnavailable) => {
            GuestBookingEnvelope::failed(BOOKING_UNAVAILABLE)
        }
        Err(error @ (GuestLinksServiceError::InvalidData(_) | GuestLinksServiceError::Store(_))) => {
            error!(link = %link, "failed to load guest booking: {error}");

            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            GuestBookingEnvelope::failed(LOAD_FAILED)
        }
    };

    Ok(Json(envelope))
}
