//! Hotelier Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::{
        errors::into_status_error,
        handlers::{AccessTokenResponse, LoginRequest},
    },
    extensions::*,
    state::State,
};

/// Hotelier Login Handler
///
/// Exchanges hotelier credentials for a bearer token scoped to their hotel.
#[endpoint(
    tags("auth"),
    summary = "Hotelier Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<AccessTokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let issued = state
        .app
        .auth
        .login_hotelier(&request.email, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(issued.into()))
}

#[cfg(test)]
mod tests {
    use innkeep_app::{
        auth::{AuthServiceError, IssuedAccessToken, MockAuthService, Principal},
        domain::hotels::records::HotelUuid,
    };
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TestState, public_service};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        public_service(
            TestState::new().with_auth(auth),
            Router::with_path("auth/hotel/login").post(handler),
        )
    }

    #[tokio::test]
    async fn test_hotel_login_returns_scoped_token() -> TestResult {
        let hotel = HotelUuid::new();

        let mut auth = MockAuthService::new();

        auth.expect_login_hotelier()
            .once()
            .withf(|email, _| email == "owner@seaside.example")
            .return_once(move |_, _| {
                Ok(IssuedAccessToken {
                    token: "ik_v1_abc.def".to_string(),
                    principal: Principal::Hotelier { hotel },
                    expires_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/auth/hotel/login")
            .json(&json!({ "email": "owner@seaside.example", "password": "hotelier-password" }))
            .send(&make_service(auth))
            .await;

        let body: AccessTokenResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.role, "hotelier");
        assert_eq!(body.hotel_id, Some(hotel.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_hotel_login_unknown_email_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login_hotelier()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let mut res = TestClient::post("http://example.com/auth/hotel/login")
            .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert!(
            res.take_string().await?.contains("Invalid credentials."),
            "uniform failure message"
        );

        Ok(())
    }
}
