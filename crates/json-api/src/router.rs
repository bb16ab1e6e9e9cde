//! App Router

use salvo::Router;

use crate::{advisor, auth, bookings, dashboard, guest, hotels};

/// Every API route: public login and guest routes, and the bearer-authenticated staff routes.
pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("auth")
                .push(Router::with_path("agency/login").post(auth::agency::handler))
                .push(Router::with_path("hotel/login").post(auth::hotel::handler)),
        )
        .push(
            Router::with_path("guest/{link}")
                .get(guest::get::handler)
                .post(guest::submit::handler),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("advisor/security-policy")
                        .post(advisor::security_policy::handler),
                )
                .push(
                    Router::with_path("hotels")
                        .get(hotels::index::handler)
                        .post(hotels::create::handler)
                        .push(
                            Router::with_path("{hotel}")
                                .get(hotels::get::handler)
                                .push(Router::with_path("rooms").get(hotels::rooms::handler))
                                .push(Router::with_path("dashboard").get(dashboard::get::handler))
                                .push(
                                    Router::with_path("booking-links")
                                        .post(bookings::links::handler),
                                )
                                .push(
                                    Router::with_path("bookings")
                                        .get(bookings::index::handler)
                                        .post(bookings::create::handler)
                                        .push(
                                            Router::with_path("{booking}")
                                                .get(bookings::get::handler)
                                                .push(
                                                    Router::with_path("cancel")
                                                        .post(bookings::cancel::handler),
                                                ),
                                        ),
                                ),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use innkeep_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::guest_links::{GuestLinksServiceError, MockGuestLinksService, records::GuestLinkUuid},
    };
    use salvo::{
        affix_state::inject,
        http::{StatusCode, header::AUTHORIZATION},
        prelude::Service,
        test::TestClient,
    };
    use testresult::TestResult;

    use crate::test_helpers::TestState;

    use super::*;

    fn make_service(state: TestState) -> Service {
        Service::new(Router::new().hoop(inject(state.into_state())).push(app_router()))
    }

    #[tokio::test]
    async fn test_staff_routes_require_bearer_token() -> TestResult {
        let res = TestClient::get("http://example.com/hotels")
            .send(&make_service(TestState::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_routes_reject_unknown_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com/hotels")
            .add_header(AUTHORIZATION, "Bearer ik_v1_nope", true)
            .send(&make_service(TestState::new().with_auth(auth)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_guest_routes_are_public() -> TestResult {
        let mut guest_links = MockGuestLinksService::new();

        guest_links
            .expect_get_guest_booking()
            .once()
            .return_once(|_| Err(GuestLinksServiceError::LinkNotFound));

        let res = TestClient::get(format!("http://example.com/guest/{}", GuestLinkUuid::new()))
            .send(&make_service(TestState::new().with_guest_links(guest_links)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
