//! Guest-facing bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use innkeep_app::domain::{
    bookings::records::BookingRecord,
    guest_links::data::{GuestBookingView, GuestSubmission, PublicHotel},
};

use crate::{
    bookings::responses::RoomSelectionBody,
    hotels::responses::{BankDetailsBody, HotelSettingsBody},
};

/// Guest Form Submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestSubmissionRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    /// Uploaded identity document
    #[serde(default)]
    pub document_url: Option<String>,

    /// Uploaded proof of payment
    #[serde(default)]
    pub payment_proof_url: Option<String>,
}

impl From<GuestSubmissionRequest> for GuestSubmission {
    fn from(request: GuestSubmissionRequest) -> Self {
        GuestSubmission {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            document_url: request.document_url,
            payment_proof_url: request.payment_proof_url,
        }
    }
}

/// Submission outcome
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmissionResponse {
    pub success: bool,
    pub message: String,

    /// Set when the booking was confirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Uuid>,
}

impl SubmissionResponse {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            booking_id: None,
        }
    }
}

/// Booking view outcome
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestBookingEnvelope {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<GuestBookingData>,
}

impl GuestBookingEnvelope {
    pub(crate) fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

/// What the guest form is rendered from
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct GuestBookingData {
    pub hotel: GuestHotelResponse,
    pub booking: GuestBookingResponse,
}

impl From<GuestBookingView> for GuestBookingData {
    fn from(view: GuestBookingView) -> Self {
        Self {
            hotel: view.hotel.into(),
            booking: view.booking.into(),
        }
    }
}

/// Hotel as shown to guests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestHotelResponse {
    pub id: Uuid,
    pub hotel_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub full_address: String,
    pub meal_plans: Vec<String>,
    pub room_categories: Vec<String>,
    pub bank_details: BankDetailsBody,
    pub settings: HotelSettingsBody,
}

impl From<PublicHotel> for GuestHotelResponse {
    fn from(hotel: PublicHotel) -> Self {
        Self {
            id: hotel.id.into_uuid(),
            hotel_name: hotel.hotel_name,
            contact_email: hotel.contact.email,
            contact_phone: hotel.contact.phone,
            full_address: hotel.full_address,
            meal_plans: hotel.meal_plans,
            room_categories: hotel.room_categories,
            bank_details: hotel.bank_details.into(),
            settings: hotel.settings.into(),
        }
    }
}

/// Booking as shown to guests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GuestBookingResponse {
    pub id: Uuid,
    pub guest_name: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub rooms: Vec<RoomSelectionBody>,
    pub meal_plan: Option<String>,
    pub language: String,
    pub total_price: u64,
    pub status: String,
    pub summary: String,
}

impl From<BookingRecord> for GuestBookingResponse {
    fn from(booking: BookingRecord) -> Self {
        let summary = booking.summary();

        Self {
            id: booking.id.into_uuid(),
            guest_name: booking.guest_name,
            check_in_date: booking.check_in_date.to_string(),
            check_out_date: booking.check_out_date.to_string(),
            rooms: booking.rooms.into_iter().map(Into::into).collect(),
            meal_plan: booking.meal_plan,
            language: booking.language,
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            summary,
        }
    }
}
