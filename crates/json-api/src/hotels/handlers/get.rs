//! Get Hotel Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use innkeep_app::domain::hotels::records::HotelUuid;

use crate::{
    extensions::*,
    hotels::{errors::into_status_error, responses::HotelResponse},
    state::State,
};

/// Get Hotel Handler
///
/// Returns a hotel's profile.
#[endpoint(
    tags("hotels"),
    summary = "Get Hotel",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Hotel"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Hotel not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<HotelResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let hotel = state
        .app
        .hotels
        .get_hotel(hotel)
        .await
        .map_err(into_status_error)?;

    Ok(Json(hotel.into()))
}
