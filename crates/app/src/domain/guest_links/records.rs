//! Guest Link Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{bookings::records::BookingUuid, hotels::records::HotelUuid},
    uuids::TypedUuid,
};

/// Guest Link UUID, also the public path segment of the link.
pub type GuestLinkUuid = TypedUuid<GuestLinkRecord>;

/// Single-use capability granting a guest access to one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestLinkRecord {
    pub id: GuestLinkUuid,
    pub booking_id: BookingUuid,
    pub hotel_id: HotelUuid,
    pub is_completed: bool,

    #[serde(default)]
    pub completed_at: Option<Timestamp>,

    /// Recorded at issue time, not enforced.
    #[serde(default)]
    pub expires_at: Option<Timestamp>,

    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}
