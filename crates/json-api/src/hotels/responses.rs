//! Hotel response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::hotels::records::{
    BankDetails, HotelRecord, HotelSettings, HotelSummary, RoomRecord,
};

/// Bank Details
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BankDetailsBody {
    #[serde(default)]
    pub account_holder: String,

    #[serde(default)]
    pub iban: String,

    #[serde(default)]
    pub bic: String,

    #[serde(default)]
    pub bank_name: String,
}

impl From<BankDetails> for BankDetailsBody {
    fn from(bank: BankDetails) -> Self {
        Self {
            account_holder: bank.account_holder,
            iban: bank.iban,
            bic: bank.bic,
            bank_name: bank.bank_name,
        }
    }
}

impl From<BankDetailsBody> for BankDetails {
    fn from(bank: BankDetailsBody) -> Self {
        Self {
            account_holder: bank.account_holder,
            iban: bank.iban,
            bic: bank.bic,
            bank_name: bank.bank_name,
        }
    }
}

/// Guest form settings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HotelSettingsBody {
    pub allow_guest_uploads: bool,
    pub max_upload_mb: u32,
    pub booking_link_expiry_hours: u32,
}

impl From<HotelSettings> for HotelSettingsBody {
    fn from(settings: HotelSettings) -> Self {
        Self {
            allow_guest_uploads: settings.allow_guest_uploads,
            max_upload_mb: settings.max_upload_mb,
            booking_link_expiry_hours: settings.booking_link_expiry_hours,
        }
    }
}

/// Hotel Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HotelResponse {
    pub id: Uuid,
    pub hotel_name: String,
    pub domain: Option<String>,
    pub hotelier_email: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub full_address: String,
    pub meal_plans: Vec<String>,
    pub room_categories: Vec<String>,
    pub bank_details: BankDetailsBody,
    pub settings: HotelSettingsBody,

    /// The date and time the hotel was created
    pub created_at: String,
}

impl From<HotelRecord> for HotelResponse {
    fn from(hotel: HotelRecord) -> Self {
        Self {
            id: hotel.id.into_uuid(),
            hotel_name: hotel.hotel_name,
            domain: hotel.domain,
            hotelier_email: hotel.hotelier_email,
            contact_email: hotel.contact.email,
            contact_phone: hotel.contact.phone,
            full_address: hotel.full_address,
            meal_plans: hotel.meal_plans,
            room_categories: hotel
                .room_categories
                .into_iter()
                .map(|category| category.name)
                .collect(),
            bank_details: hotel.bank_details.into(),
            settings: hotel.settings.into(),
            created_at: hotel.created_at.to_string(),
        }
    }
}

/// Hotel list entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HotelSummaryResponse {
    pub id: Uuid,
    pub hotel_name: String,
    pub domain: Option<String>,
    pub hotelier_email: String,
    pub booking_count: usize,
    pub created_at: String,
}

impl From<HotelSummary> for HotelSummaryResponse {
    fn from(summary: HotelSummary) -> Self {
        Self {
            id: summary.hotel.id.into_uuid(),
            hotel_name: summary.hotel.hotel_name,
            domain: summary.hotel.domain,
            hotelier_email: summary.hotel.hotelier_email,
            booking_count: summary.booking_count,
            created_at: summary.hotel.created_at.to_string(),
        }
    }
}

/// Room Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity: u32,

    /// Nightly price in minor currency units
    pub price: u64,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        Self {
            id: room.id.into_uuid(),
            name: room.name,
            capacity: room.capacity,
            price: room.price,
        }
    }
}
