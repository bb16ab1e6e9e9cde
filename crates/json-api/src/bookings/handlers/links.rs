//! Create Booking Link Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::{bookings::data::NewBookingLink, hotels::records::HotelUuid};

use crate::{
    bookings::{errors::into_status_error, handlers::parse_date, responses::BookingLinkResponse},
    extensions::*,
    state::State,
};

/// Create Booking Link Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBookingLinkRequest {
    pub guest_name: String,

    /// `YYYY-MM-DD`
    pub check_in_date: String,

    /// `YYYY-MM-DD`
    pub check_out_date: String,

    pub room_type: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Total price in minor currency units, if already quoted
    #[serde(default)]
    pub total_price: Option<u64>,
}

fn default_language() -> String {
    "en".to_string()
}

impl CreateBookingLinkRequest {
    fn into_new_link(self) -> Result<NewBookingLink, StatusError> {
        Ok(NewBookingLink {
            check_in_date: parse_date(&self.check_in_date, "checkInDate")?,
            check_out_date: parse_date(&self.check_out_date, "checkOutDate")?,
            guest_name: self.guest_name,
            room_type: self.room_type,
            language: self.language,
            total_price: self.total_price,
        })
    }
}

/// Create Booking Link Handler
///
/// Creates a `pending_guest` booking and the single-use link the guest completes it through.
#[endpoint(
    tags("bookings"),
    summary = "Create Booking Link",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking link issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Access to this hotel is not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Hotel not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hotel: PathParam<Uuid>,
    json: JsonBody<CreateBookingLinkRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingLinkResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel = HotelUuid::from_uuid(hotel.into_inner());

    depot.hotel_access_or_403(hotel)?;

    let link = json.into_inner().into_new_link()?;

    let issued = state
        .app
        .bookings
        .create_booking_link(hotel, link)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(issued.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use validator::Validate;

    use innkeep_app::domain::{
        bookings::{
            BookingsServiceError, MockBookingsService, data::IssuedBookingLink,
            records::BookingUuid,
        },
        guest_links::records::GuestLinkUuid,
    };

    use crate::test_helpers::{TestState, agency_service, hotelier_service};

    use super::*;

    fn route() -> Router {
        Router::with_path("hotels/{hotel}/booking-links").post(handler)
    }

    #[tokio::test]
    async fn test_issue_link_returns_ids_and_guest_path() -> TestResult {
        let hotel = HotelUuid::new();
        let guest_link = GuestLinkUuid::new();
        let issued = IssuedBookingLink::new(BookingUuid::new(), guest_link);

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_create_booking_link()
            .once()
            .withf(move |h, link| {
                *h == hotel && link.guest_name == "Alice Doe" && link.total_price.is_none()
            })
            .return_once(move |_, _| Ok(issued));

        let mut res = TestClient::post(format!("http://example.com/hotels/{hotel}/booking-links"))
            .json(&json!({
                "guestName": "Alice Doe",
                "checkInDate": "2025-06-01",
                "checkOutDate": "2025-06-05",
                "roomType": "Suite"
            }))
            .send(&hotelier_service(TestState::new().with_bookings(bookings), hotel, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: BookingLinkResponse = res.take_json().await?;

        assert_eq!(body.guest_link_id, guest_link.into_uuid());
        assert_eq!(body.link, format!("/guest/{guest_link}"));

        Ok(())
    }

    #[tokio::test]
    async fn test_issue_link_with_inverted_stay_returns_400() -> TestResult {
        let hotel = HotelUuid::new();

        let mut bookings = MockBookingsService::new();

        bookings
            .expect_create_booking_link()
            .once()
            .return_once(|_, link| {
                Err(link
                    .validate()
                    .err()
                    .map_or(BookingsServiceError::Conflict, BookingsServiceError::InvalidData))
            });

        let mut res = TestClient::post(format!("http://example.com/hotels/{hotel}/booking-links"))
            .json(&json!({
                "guestName": "Alice Doe",
                "checkInDate": "2025-06-05",
                "checkOutDate": "2025-06-01",
                "roomType": "Suite"
            }))
            .send(&agency_service(TestState::new().with_bookings(bookings), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(
            res.take_string()
                .await?
                .contains("Check-out date must be after check-in date."),
            "stay validation message surfaces"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_issue_link_for_other_hotel_returns_403() -> TestResult {
        let res = TestClient::post(format!(
            "http://example.com/hotels/{}/booking-links",
            HotelUuid::new()
        ))
        .json(&json!({
            "guestName": "Alice Doe",
            "checkInDate": "2025-06-01",
            "checkOutDate": "2025-06-05",
            "roomType": "Suite"
        }))
        .send(&hotelier_service(TestState::new(), HotelUuid::new(), route()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
