//! Security Policy Advisor Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use innkeep_app::content::{SecurityPolicy, SecurityPolicyInput};

use crate::{advisor::errors::into_status_error, extensions::*, state::State};

/// Security Policy Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SecurityPolicyRequest {
    pub hotel_name: String,
    pub hotel_description: String,
    pub existing_security_measures: String,
    pub potential_threats: String,
}

impl From<SecurityPolicyRequest> for SecurityPolicyInput {
    fn from(request: SecurityPolicyRequest) -> Self {
        SecurityPolicyInput {
            hotel_name: request.hotel_name,
            hotel_description: request.hotel_description,
            existing_security_measures: request.existing_security_measures,
            potential_threats: request.potential_threats,
        }
    }
}

/// Security Policy Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SecurityPolicyResponse {
    pub policy_recommendations: String,
}

impl From<SecurityPolicy> for SecurityPolicyResponse {
    fn from(policy: SecurityPolicy) -> Self {
        Self {
            policy_recommendations: policy.policy_recommendations,
        }
    }
}

/// Security Policy Advisor Handler
///
/// Recommends security policies for a hotel profile. Agency only.
#[endpoint(
    tags("advisor"),
    summary = "Recommend Security Policies",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Recommendations"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Agency access required"),
        (status_code = StatusCode::TOO_MANY_REQUESTS, description = "Generation rate limited"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Generation failed"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SecurityPolicyRequest>,
    depot: &mut Depot,
) -> Result<Json<SecurityPolicyResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.agency_or_403()?;

    let policy = state
        .app
        .content
        .security_policy(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(policy.into()))
}
