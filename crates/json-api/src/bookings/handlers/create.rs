//! Create Direct Booking Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::{bookings::data::NewDirectBooking, hotels::records::HotelUuid};

use crate::{
    bookings::{
        errors::into_status_error,
        handlers::parse_date,
        responses::{BookingLinkResponse, RoomSelectionBody},
    },
    extensions::*,
    state::State,
};

/// Create Direct Booking Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDirectBookingRequest {
    pub first_name: String,
    pub last_name: String,

    /// `YYYY-MM-DD`
    pub check_in_date: String,

    /// `YYYY-MM-DD`
    pub check_out_date: String,

    #[serde(default)]
    pub meal_plan: Option<String>,

    pub language: String,

    /// Total price in minor currency units
    pub total_price: u64,

    pub rooms: Vec<RoomSelectionBody>,

    #[serde(default)]
    pub internal_notes: Option<String>,
}

impl CreateDirectBookingRequest {
    fn into_new_booking(self) -> Result<NewDirectBooking, StatusError> {
        Ok(NewDirectBooking {
            check_in_date: parse_date(&self.check_in_date, "checkInDate")?,
            check_out_date: parse_date(&self.check_out_date, "checkOutDate")?,
            first_name: self.first_name,
            last_name: self.last_name,
            meal_plan: self.meal_plan,
            language: self.language,
            total_price: self.total_price,
            rooms: self.rooms.into_iter().map(Into::into).collect(),
            internal_notes: self.internal_notes,
        })
    }
}

/// Create Direct Booking Handler
///
/// Records a booking captured in full by hotel staff, together with its guest link.
#[endpoint(
    tags("bookings"),
    summary = "Create Direct Booking",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Hotel not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    json: JsonBody<CreateDirectBookingRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingLinkResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let booking = json.into_inner().into_new_booking()?;

    let issued = state
        .app
        .bookings
        .create_direct_booking(hotel, booking)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/hotels/{hotel}/bookings/{}", issued.booking),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(issued.into()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use innkeep_app::domain::{
        bookings::{
            BookingsServiceError, MockBookingsService, data::IssuedBookingLink,
            records::BookingUuid,
        },
        guest_links::records::GuestLinkUuid,
    };

    use crate::test_helpers::{TestState, hotelier_service};

    use super::*;

    fn make_service(hotel: HotelUuid, bookings: MockBookingsService) -> Service {
        hotelier_service(
            TestState::new().with_bookings(bookings),
            hotel,
            Router::with_path("hotels/{hotel}/bookings").post(handler),
        )
    }

    fn payload() -> Value {
        json!({
            "firstName": "Alice",
            "lastName": "Doe",
            "checkInDate": "2025-06-01",
            "checkOutDate": "2025-06-05",
            "language": "en",
            "totalPrice": 48000,
            "rooms": [{ "roomType": "Double", "adults": 2 }, { "roomType": "Suite" }]
        })
    }

    #[tokio::test]
    async fn test_create_direct_booking_returns_201() -> TestResult {
        let hotel = HotelUuid::new();
        let issued = IssuedBookingLink::new(BookingUuid::new(), GuestLinkUuid::new());
        let booking = issued.booking;
        let link = issued.link.clone();

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_create_direct_booking()
            .once()
            .withf(move |h, new| {
                *h == hotel
                    && new.check_in_date == date(2025, 6, 1)
                    && new.rooms.len() == 2
                    && new.total_price == 48_000
            })
            .return_once(move |_, _| Ok(issued));

        let mut res = TestClient::post(format!("http://example.com/hotels/{hotel}/bookings"))
            .json(&payload())
            .send(&make_service(hotel, bookings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: BookingLinkResponse = res.take_json().await?;

        assert_eq!(body.booking_id, booking.into_uuid());
        assert_eq!(body.link, link);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_malformed_date_returns_400() -> TestResult {
        let hotel = HotelUuid::new();

        let mut bookings = MockBookingsService::new();

        bookings.expect_create_direct_booking().never();

        let mut body = payload();

        if let Some(fields) = body.as_object_mut() {
            fields.insert("checkInDate".to_string(), json!("June 1st"));
        }

        let res = TestClient::post(format!("http://example.com/hotels/{hotel}/bookings"))
            .json(&body)
            .send(&make_service(hotel, bookings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_for_unknown_hotel_returns_404() -> TestResult {
        let hotel = HotelUuid::new();

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_create_direct_booking()
            .once()
            .return_once(|_, _| Err(BookingsServiceError::HotelNotFound));

        let res = TestClient::post(format!("http://example.com/hotels/{hotel}/bookings"))
            .json(&payload())
            .send(&make_service(hotel, bookings))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
