//! Login Handlers

pub(crate) mod agency;
pub(crate) mod hotel;

use innkeep_app::auth::{IssuedAccessToken, Principal};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access Token Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccessTokenResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,

    /// Always `Bearer`
    pub token_type: String,

    /// Expiry as an RFC 3339 timestamp
    pub expires_at: String,

    /// `agency` or `hotelier`
    pub role: String,

    /// Hotel the token is scoped to, for hoteliers
    pub hotel_id: Option<Uuid>,
}

impl From<IssuedAccessToken> for AccessTokenResponse {
    fn from(issued: IssuedAccessToken) -> Self {
        let (role, hotel_id) = match issued.principal {
            Principal::Agency => ("agency", None),
            Principal::Hotelier { hotel } => ("hotelier", Some(hotel.into_uuid())),
        };

        Self {
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_at: issued.expires_at.to_string(),
            role: role.to_string(),
            hotel_id,
        }
    }
}
