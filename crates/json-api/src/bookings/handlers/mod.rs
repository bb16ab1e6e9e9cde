//! Booking Handlers

pub(crate) mod cancel;
pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod links;

use jiff::civil::Date;
use salvo::prelude::StatusError;

use crate::extensions::*;

/// Parse a `YYYY-MM-DD` request field.
fn parse_date(value: &str, field: &str) -> Result<Date, StatusError> {
    value
        .parse::<Date>()
        .or_400(&format!("{field} must be a YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use innkeep_app::domain::{
        bookings::records::{BookingRecord, BookingStatus, BookingUuid, RoomSelection},
        guest_links::records::GuestLinkUuid,
        hotels::records::HotelUuid,
    };

    use super::*;

    pub(super) fn make_booking(id: BookingUuid, hotel: HotelUuid) -> BookingRecord {
        BookingRecord {
            id,
            hotel_id: hotel,
            guest_name: "Alice Doe".to_string(),
            check_in_date: date(2025, 6, 1),
            check_out_date: date(2025, 6, 5),
            rooms: vec![RoomSelection {
                room_type: "Suite".to_string(),
                adults: 2,
                children: 0,
                toddlers: 0,
                child_ages: Vec::new(),
            }],
            meal_plan: None,
            language: "en".to_string(),
            total_price: 48_000,
            status: BookingStatus::PendingGuest,
            guest_link_id: GuestLinkUuid::new(),
            guest_details: None,
            document_url: None,
            payment_proof_url: None,
            internal_notes: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2025-06-01", "checkInDate").ok(), Some(date(2025, 6, 1)));
        assert!(parse_date("01.06.2025", "checkInDate").is_err());
    }
}
