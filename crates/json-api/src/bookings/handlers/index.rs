//! List Bookings Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use innkeep_app::domain::hotels::records::HotelUuid;

use crate::{
    bookings::{errors::into_status_error, responses::BookingResponse},
    extensions::*,
    state::State,
};

/// List Bookings Handler
///
/// Lists a hotel's bookings, newest first.
#[endpoint(
    tags("bookings"),
    summary = "List Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Bookings"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<BookingResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let bookings = state
        .app
        .bookings
        .list_bookings(hotel)
        .await
        .map_err(into_status_error)?;

    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
