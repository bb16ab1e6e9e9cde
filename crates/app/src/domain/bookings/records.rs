//! Booking Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{guest_links::records::GuestLinkUuid, hotels::records::HotelUuid},
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// Booking lifecycle: `pending_guest` → `confirmed` → `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    PendingGuest,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingGuest => "pending_guest",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a booking may move from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::PendingGuest, Self::Confirmed)
                | (Self::PendingGuest | Self::Confirmed, Self::Cancelled)
        )
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Guest contact details captured by the guest form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// A room requested as part of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSelection {
    pub room_type: String,

    #[serde(default)]
    pub adults: u32,

    #[serde(default)]
    pub children: u32,

    #[serde(default)]
    pub toddlers: u32,

    #[serde(default)]
    pub child_ages: Vec<u32>,
}

/// Booking Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: BookingUuid,
    pub hotel_id: HotelUuid,
    pub guest_name: String,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub rooms: Vec<RoomSelection>,
    pub meal_plan: Option<String>,
    pub language: String,

    /// Total price in minor currency units.
    pub total_price: u64,

    pub status: BookingStatus,
    pub guest_link_id: GuestLinkUuid,
    pub guest_details: Option<GuestDetails>,
    pub document_url: Option<String>,
    pub payment_proof_url: Option<String>,
    pub internal_notes: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Timestamp,

    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

impl BookingRecord {
    /// Human-readable room summary, e.g. `Booking for 2 room(s): Double, Suite.`
    #[must_use]
    pub fn summary(&self) -> String {
        let types: Vec<&str> = self
            .rooms
            .iter()
            .map(|room| room.room_type.as_str())
            .collect();

        if types.is_empty() {
            return "Booking for 0 room(s).".to_string();
        }

        format!("Booking for {} room(s): {}.", types.len(), types.join(", "))
    }
}
