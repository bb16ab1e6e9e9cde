//! Test Helpers

use jiff::civil::date;

use crate::{
    domain::{
        bookings::{
            BookingsService, BookingsServiceError,
            data::{IssuedBookingLink, NewBookingLink, NewDirectBooking},
            records::RoomSelection,
        },
        guest_links::data::GuestSubmission,
        hotels::{
            HotelsService, HotelsServiceError,
            data::NewHotel,
            records::{BankDetails, HotelRecord, HotelUuid},
        },
    },
    test::TestContext,
};

pub(crate) const HOTELIER_PASSWORD: &str = "hotelier-password";

pub(crate) fn new_hotel(name: &str, hotelier_email: &str) -> NewHotel {
    NewHotel {
        hotel_name: name.to_string(),
        domain: None,
        hotelier_email: hotelier_email.to_string(),
        hotelier_password: HOTELIER_PASSWORD.to_string(),
        contact_email: "desk@hotel.example".to_string(),
        contact_phone: "+1-555-0100".to_string(),
        full_address: "1 Harbour Road, Seaside".to_string(),
        meal_plans: vec!["Breakfast".to_string(), "Half board".to_string()],
        room_categories: vec!["Double".to_string(), "Suite".to_string()],
        bank_details: BankDetails {
            account_holder: name.to_string(),
            iban: "DE89370400440532013000".to_string(),
            bic: "COBADEFFXXX".to_string(),
            bank_name: "Test Bank".to_string(),
        },
    }
}

pub(crate) async fn create_hotel(
    ctx: &TestContext,
    name: &str,
    hotelier_email: &str,
) -> Result<HotelRecord, HotelsServiceError> {
    ctx.hotels.create_hotel(new_hotel(name, hotelier_email)).await
}

/// A Suite from 2025-06-01 to 2025-06-05.
pub(crate) fn new_booking_link(guest_name: &str) -> NewBookingLink {
    NewBookingLink {
        guest_name: guest_name.to_string(),
        check_in_date: date(2025, 6, 1),
        check_out_date: date(2025, 6, 5),
        room_type: "Suite".to_string(),
        language: "en".to_string(),
        total_price: None,
    }
}

pub(crate) async fn create_booking_link(
    ctx: &TestContext,
    hotel: HotelUuid,
    guest_name: &str,
) -> Result<IssuedBookingLink, BookingsServiceError> {
    ctx.bookings
        .create_booking_link(hotel, new_booking_link(guest_name))
        .await
}

/// Alice Doe in a Double and a Suite, 480.00 in total.
pub(crate) fn new_direct_booking() -> NewDirectBooking {
    NewDirectBooking {
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        check_in_date: date(2025, 6, 1),
        check_out_date: date(2025, 6, 5),
        meal_plan: Some("Breakfast".to_string()),
        language: "en".to_string(),
        total_price: 48_000,
        rooms: vec![
            RoomSelection {
                room_type: "Double".to_string(),
                adults: 2,
                children: 0,
                toddlers: 0,
                child_ages: Vec::new(),
            },
            RoomSelection {
                room_type: "Suite".to_string(),
                adults: 1,
                children: 1,
                toddlers: 0,
                child_ages: vec![7],
            },
        ],
        internal_notes: None,
    }
}

pub(crate) fn guest_submission() -> GuestSubmission {
    GuestSubmission {
        first_name: "Alice".to_string(),
        last_name: "Doe".to_string(),
        email: "alice@example.com".to_string(),
        phone: "+1-555".to_string(),
        document_url: None,
        payment_proof_url: None,
    }
}
