//! Authenticated principal storage and access checks.

use innkeep_app::{auth::Principal, domain::hotels::records::HotelUuid};
use salvo::prelude::{Depot, StatusError};

const PRINCIPAL_DEPOT_KEY: &str = "principal";

pub(crate) trait PrincipalExt {
    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The caller, if it may act on `hotel`.
    fn hotel_access_or_403(&self, hotel: HotelUuid) -> Result<Principal, StatusError>;

    /// The caller, if it is agency staff.
    fn agency_or_403(&self) -> Result<Principal, StatusError>;
}

impl PrincipalExt for Depot {
    fn insert_principal(&mut self, principal: Principal) {
        self.insert(PRINCIPAL_DEPOT_KEY, principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.get::<Principal>(PRINCIPAL_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn hotel_access_or_403(&self, hotel: HotelUuid) -> Result<Principal, StatusError> {
        let principal = self.principal_or_401()?;

        if principal.can_access(hotel) {
            Ok(principal)
        } else {
            Err(StatusError::forbidden().brief("Access to this hotel is not allowed"))
        }
    }

    fn agency_or_403(&self) -> Result<Principal, StatusError> {
        let principal = self.principal_or_401()?;

        if principal.is_agency() {
            Ok(principal)
        } else {
            Err(StatusError::forbidden().brief("Agency access required"))
        }
    }
}
