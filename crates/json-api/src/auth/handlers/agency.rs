//! Agency Login Handler

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

/// Agency Login Handler
///
/// Exchanges agency credentials for a bearer token.
#[endpoint(
    tags("auth"),
    summary = "Agency Login",
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
        .login_agency(&request.email, &request.password)
        .await
        .map_err(into_status_error)?;

    Ok(Json(issued.into()))
}
