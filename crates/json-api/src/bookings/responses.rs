//! Booking request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::bookings::{
    data::IssuedBookingLink,
    records::{BookingRecord, GuestDetails, RoomSelection},
};

/// Requested room
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomSelectionBody {
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

impl From<RoomSelection> for RoomSelectionBody {
    fn from(room: RoomSelection) -> Self {
        Self {
            room_type: room.room_type,
            adults: room.adults,
            children: room.children,
            toddlers: room.toddlers,
            child_ages: room.child_ages,
        }
    }
}

impl From<RoomSelectionBody> for RoomSelection {
    fn from(room: RoomSelectionBody) -> Self {
        Self {
            room_type: room.room_type,
            adults: room.adults,
            children: room.children,
            toddlers: room.toddlers,
            child_ages: room.child_ages,
        }
    }
}

/// Guest contact details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestDetailsBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<GuestDetails> for GuestDetailsBody {
    fn from(guest: GuestDetails) -> Self {
        Self {
            first_name: guest.first_name,
            last_name: guest.last_name,
            email: guest.email,
            phone: guest.phone,
        }
    }
}

/// Booking Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingResponse {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_name: String,

    /// `YYYY-MM-DD`
    pub check_in_date: String,

    /// `YYYY-MM-DD`
    pub check_out_date: String,

    pub rooms: Vec<RoomSelectionBody>,
    pub meal_plan: Option<String>,
    pub language: String,

    /// Total price in minor currency units
    pub total_price: u64,

    /// `pending_guest`, `confirmed` or `cancelled`
    pub status: String,

    pub guest_link_id: Uuid,
    pub guest_details: Option<GuestDetailsBody>,
    pub document_url: Option<String>,
    pub payment_proof_url: Option<String>,
    pub internal_notes: Option<String>,

    /// e.g. `Booking for 2 room(s): Double, Suite.`
    pub summary: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(booking: BookingRecord) -> Self {
        let summary = booking.summary();

        Self {
            id: booking.id.into_uuid(),
            hotel_id: booking.hotel_id.into_uuid(),
            guest_name: booking.guest_name,
            check_in_date: booking.check_in_date.to_string(),
            check_out_date: booking.check_out_date.to_string(),
            rooms: booking.rooms.into_iter().map(Into::into).collect(),
            meal_plan: booking.meal_plan,
            language: booking.language,
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            guest_link_id: booking.guest_link_id.into_uuid(),
            guest_details: booking.guest_details.map(Into::into),
            document_url: booking.document_url,
            payment_proof_url: booking.payment_proof_url,
            internal_notes: booking.internal_notes,
            summary,
            created_at: booking.created_at.to_string(),
            updated_at: booking.updated_at.to_string(),
        }
    }
}

/// Issued Booking Link Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingLinkResponse {
    pub booking_id: Uuid,
    pub guest_link_id: Uuid,

    /// Path to share with the guest, e.g. `/guest/{guestLinkId}`
    pub link: String,
}

impl From<IssuedBookingLink> for BookingLinkResponse {
    fn from(issued: IssuedBookingLink) -> Self {
        Self {
            booking_id: issued.booking.into_uuid(),
            guest_link_id: issued.guest_link.into_uuid(),
            link: issued.link,
        }
    }
}
