//! Create Hotel Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use innkeep_app::domain::hotels::data::NewHotel;

use crate::{
    extensions::*,
    hotels::{
        errors::into_status_error,
        responses::{BankDetailsBody, HotelResponse},
    },
    state::State,
};

/// Create Hotel Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateHotelRequest {
    pub hotel_name: String,

    #[serde(default)]
    pub domain: Option<String>,

    /// Login email of the hotel's staff account
    pub hotelier_email: String,

    /// Initial password of the hotel's staff account
    pub hotelier_password: String,

    pub contact_email: String,
    pub contact_phone: String,
    pub full_address: String,

    #[serde(default)]
    pub meal_plans: Vec<String>,

    pub room_categories: Vec<String>,

    #[serde(default)]
    pub bank_details: BankDetailsBody,
}

impl From<CreateHotelRequest> for NewHotel {
    fn from(request: CreateHotelRequest) -> Self {
        NewHotel {
            hotel_name: request.hotel_name,
            domain: request.domain,
            hotelier_email: request.hotelier_email,
            hotelier_password: request.hotelier_password,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            full_address: request.full_address,
            meal_plans: request.meal_plans,
            room_categories: request.room_categories,
            bank_details: request.bank_details.into(),
        }
    }
}

/// Create Hotel Handler
///
/// Registers a hotel with its hotelier login and room inventory. Agency only.
#[endpoint(
    tags("hotels"),
    summary = "Create Hotel",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Hotel created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Agency access required"),
        (status_code = StatusCode::CONFLICT, description = "Hotelier email already registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateHotelRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HotelResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.agency_or_403()?;

    let hotel = state
        .app
        .hotels
        .create_hotel(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/hotels/{}", hotel.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(hotel.into()))
}
