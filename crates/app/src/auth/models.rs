//! Auth data models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    auth::AccessTokenVersion, domain::hotels::records::HotelUuid, uuids::TypedUuid,
};

/// Access token UUID
pub type AccessTokenUuid = TypedUuid<AccessTokenRecord>;

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Principal {
    /// Agency staff; may manage every hotel.
    Agency,

    /// Hotel staff; limited to a single hotel.
    Hotelier {
        #[serde(rename = "hotelId")]
        hotel: HotelUuid,
    },
}

impl Principal {
    /// Whether this principal may act on `hotel`.
    #[must_use]
    pub fn can_access(&self, hotel: HotelUuid) -> bool {
        match self {
            Self::Agency => true,
            Self::Hotelier { hotel: own } => *own == hotel,
        }
    }

    #[must_use]
    pub const fn is_agency(&self) -> bool {
        matches!(self, Self::Agency)
    }
}

/// Agency login configured for the deployment.
#[derive(Debug, Clone)]
pub struct AgencyCredentials {
    pub email: String,

    /// Verifier produced by [`crate::auth::hash_password`].
    pub password_hash: String,
}

/// Persisted access token. Only the verifier digest is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRecord {
    pub id: AccessTokenUuid,
    pub version: AccessTokenVersion,
    pub token_hash: String,
    pub principal: Principal,
    pub expires_at: Timestamp,

    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// Token issued by a successful login; the raw token is only available here.
#[derive(Debug, Clone)]
pub struct IssuedAccessToken {
    pub token: String,
    pub principal: Principal,
    pub expires_at: Timestamp,
}
