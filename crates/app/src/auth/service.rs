//! Auth service.

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::{debug, info};

use crate::{
    auth::{
        AccessTokenRecord, AccessTokenUuid, AccessTokenVersion, AgencyCredentials,
        AuthServiceError, IssuedAccessToken, Principal, format_access_token,
        generate_access_token_secret, parse_access_token, token_verifier, verify_password,
    },
    database::Db,
    domain::hotels::records::{HotelRecord, HotelierEmailRecord, hotelier_email_key},
    store::{Collection, WriteBatch},
};

/// Default lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(12);

#[derive(Debug, Clone)]
pub struct StoreAuthService {
    db: Db,
    agency: Option<AgencyCredentials>,
    token_ttl: SignedDuration,
}

impl StoreAuthService {
    #[must_use]
    pub fn new(db: Db, agency: Option<AgencyCredentials>, token_ttl: SignedDuration) -> Self {
        Self {
            db,
            agency,
            token_ttl,
        }
    }

    async fn issue_access_token(
        &self,
        principal: Principal,
    ) -> Result<IssuedAccessToken, AuthServiceError> {
        let token_uuid = AccessTokenUuid::new();
        let version = AccessTokenVersion::V1;
        let secret = generate_access_token_secret();
        let token = format_access_token(token_uuid.into_uuid(), version, &secret);
        let now = Timestamp::now();

        let expires_at = now
            .checked_add(self.token_ttl)
            .unwrap_or(Timestamp::MAX);

        let record = AccessTokenRecord {
            id: token_uuid,
            version,
            token_hash: token_verifier(&token_uuid.into_uuid(), version, &secret),
            principal,
            expires_at,
            created_at: now,
        };

        let mut batch = WriteBatch::new();
        batch.create(Collection::AccessTokens, token_uuid, &record)?;
        self.db.commit(batch).await?;

        debug!(token = %token_uuid, "issued access token");

        Ok(IssuedAccessToken {
            token,
            principal,
            expires_at,
        })
    }
}

#[async_trait]
impl AuthService for StoreAuthService {
    async fn login_agency(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedAccessToken, AuthServiceError> {
        let Some(agency) = &self.agency else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        let email_matches = constant_time_eq(
            agency.email.trim().to_ascii_lowercase().as_bytes(),
            email.trim().to_ascii_lowercase().as_bytes(),
        );

        if !(verify_password(password, &agency.password_hash) && email_matches) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        info!("agency login succeeded");

        self.issue_access_token(Principal::Agency).await
    }

    async fn login_hotelier(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedAccessToken, AuthServiceError> {
        let Some(claim) = self
            .db
            .get::<HotelierEmailRecord>(Collection::HotelierEmails, hotelier_email_key(email))
            .await?
        else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        let Some(hotel) = self
            .db
            .get::<HotelRecord>(Collection::Hotels, claim.hotel_id)
            .await?
        else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password, &hotel.hotelier_password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        info!(hotel = %hotel.id, "hotelier login succeeded");

        self.issue_access_token(Principal::Hotelier { hotel: hotel.id })
            .await
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed =
            parse_access_token(bearer_token).map_err(|_ignored| AuthServiceError::NotFound)?;

        let token: AccessTokenRecord = self
            .db
            .get(Collection::AccessTokens, parsed.token_uuid)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if token.version != parsed.version || token.expires_at <= Timestamp::now() {
            return Err(AuthServiceError::NotFound);
        }

        let presented = token_verifier(&parsed.token_uuid, parsed.version, &parsed.secret);

        if !constant_time_eq(presented.as_bytes(), token.token_hash.as_bytes()) {
            return Err(AuthServiceError::NotFound);
        }

        Ok(token.principal)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange the configured agency credentials for an access token.
    async fn login_agency(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedAccessToken, AuthServiceError>;

    /// Exchange a hotel's hotelier credentials for an access token.
    async fn login_hotelier(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedAccessToken, AuthServiceError>;

    /// Resolve a bearer token to the principal it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}
