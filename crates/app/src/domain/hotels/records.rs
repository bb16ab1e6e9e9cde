//! Hotel Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::uuids::TypedUuid;

/// Hotel UUID
pub type HotelUuid = TypedUuid<HotelRecord>;

/// Room UUID
pub type RoomUuid = TypedUuid<RoomRecord>;

/// Hotel Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    pub id: HotelUuid,
    pub hotel_name: String,
    pub domain: Option<String>,
    pub hotelier_email: String,
    pub hotelier_password_hash: String,
    pub contact: ContactDetails,
    pub full_address: String,
    pub meal_plans: Vec<String>,
    pub room_categories: Vec<RoomCategory>,
    pub bank_details: BankDetails,
    pub settings: HotelSettings,

    #[serde(skip_serializing)]
    pub created_at: Timestamp,

    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder: String,
    pub iban: String,
    pub bic: String,
    pub bank_name: String,
}

/// Per-hotel guest form settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSettings {
    pub allow_guest_uploads: bool,
    pub max_upload_mb: u32,
    pub booking_link_expiry_hours: u32,
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            allow_guest_uploads: true,
            max_upload_mb: 10,
            booking_link_expiry_hours: 48,
        }
    }
}

/// Claims a hotelier email for one hotel.
///
/// Stored under [`hotelier_email_key`], so a second claim on the same address
/// collides at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelierEmailRecord {
    pub hotel_id: HotelUuid,
    pub email: String,
}

/// Lowercase and trim a hotelier email.
#[must_use]
pub fn normalize_hotelier_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Deterministic document id for a hotelier email claim.
#[must_use]
pub fn hotelier_email_key(email: &str) -> Uuid {
    let normalized = normalize_hotelier_email(email);

    Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("mailto:{normalized}").as_bytes())
}

/// Hotel with the number of bookings it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelSummary {
    pub hotel: HotelRecord,
    pub booking_count: usize,
}

/// Room Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: RoomUuid,
    pub hotel_id: HotelUuid,
    pub name: String,
    pub capacity: u32,

    /// Nightly price in minor currency units.
    pub price: u64,

    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotelier_email_key_ignores_case_and_padding() {
        assert_eq!(
            hotelier_email_key("Same@Owner.example "),
            hotelier_email_key("same@owner.example")
        );
        assert_ne!(
            hotelier_email_key("same@owner.example"),
            hotelier_email_key("other@owner.example")
        );
    }
}
