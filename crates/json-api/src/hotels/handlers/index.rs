//! List Hotels Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    hotels::{errors::into_status_error, responses::HotelSummaryResponse},
    state::State,
};

/// List Hotels Handler
///
/// Lists every hotel with its booking count. Agency only.
#[endpoint(
    tags("hotels"),
    summary = "List Hotels",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Hotels"),
        (status_code = StatusCode::FORBIDDEN, description = "Agency access required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<HotelSummaryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.agency_or_403()?;

    let hotels = state
        .app
        .hotels
        .list_hotels()
        .await
        .map_err(into_status_error)?;

    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use innkeep_app::domain::hotels::{
        MockHotelsService,
        records::{HotelSummary, HotelUuid},
    };

    use crate::{
        hotels::handlers::tests::make_hotel,
        test_helpers::{TestState, agency_service, hotelier_service},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("hotels").get(handler)
    }

    #[tokio::test]
    async fn test_index_returns_hotels_with_booking_counts() -> TestResult {
        let id = HotelUuid::new();

        let mut hotels = MockHotelsService::new();

        hotels.expect_list_hotels().once().return_once(move || {
            Ok(vec![HotelSummary {
                hotel: make_hotel(id),
                booking_count: 3,
            }])
        });

        let mut res = TestClient::get("http://example.com/hotels")
            .send(&agency_service(TestState::new().with_hotels(hotels), route()))
            .await;

        let body: Vec<HotelSummaryResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.len(), 1);
        assert_eq!(body.first().map(|hotel| hotel.id), Some(id.into_uuid()));
        assert_eq!(body.first().map(|hotel| hotel.booking_count), Some(3));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forbidden_for_hoteliers() -> TestResult {
        let res = TestClient::get("http://example.com/hotels")
            .send(&hotelier_service(TestState::new(), HotelUuid::new(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
