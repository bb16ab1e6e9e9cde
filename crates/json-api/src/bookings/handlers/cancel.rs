//! Cancel Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use innkeep_app::domain::{bookings::records::BookingUuid, hotels::records::HotelUuid};

use crate::{
    bookings::{errors::into_status_error, responses::BookingResponse},
    extensions::*,
    state::State,
};

/// Cancel Booking Handler
///
/// Moves a pending or confirmed booking to `cancelled`.
#[endpoint(
    tags("bookings"),
    summary = "Cancel Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Booking cancelled"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Booking not found"),
        (status_code = StatusCode::CONFLICT, description = "Booking cannot be cancelled"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    booking: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let booking = state
        .app
        .bookings
        .cancel_booking(hotel, BookingUuid::from_uuid(booking.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(booking.into()))
}
