//! Bookings Data

use std::borrow::Cow;

use jiff::civil::Date;
use validator::{Validate, ValidationError};

use crate::domain::{
    bookings::records::{BookingUuid, RoomSelection},
    guest_links::records::GuestLinkUuid,
};

/// Booking created by hotel staff and completed by the guest through a link.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_link_stay", skip_on_field_errors = false))]
pub struct NewBookingLink {
    #[validate(length(min = 2, message = "Guest name is required."))]
    pub guest_name: String,

    pub check_in_date: Date,
    pub check_out_date: Date,

    #[validate(length(min = 3, message = "Room type is required."))]
    pub room_type: String,

    pub language: String,

    /// Total price in minor currency units; zero when not yet quoted.
    pub total_price: Option<u64>,
}

/// Booking captured in full by hotel staff.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_direct_stay", skip_on_field_errors = false))]
pub struct NewDirectBooking {
    #[validate(length(min = 1, message = "First name is required."))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required."))]
    pub last_name: String,

    pub check_in_date: Date,
    pub check_out_date: Date,
    pub meal_plan: Option<String>,
    pub language: String,

    /// Total price in minor currency units.
    pub total_price: u64,

    #[validate(length(min = 1, message = "At least one room is required."))]
    pub rooms: Vec<RoomSelection>,

    pub internal_notes: Option<String>,
}

/// Result of issuing a booking together with its guest link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedBookingLink {
    pub booking: BookingUuid,
    pub guest_link: GuestLinkUuid,

    /// Relative path to share with the guest.
    pub link: String,
}

impl IssuedBookingLink {
    #[must_use]
    pub fn new(booking: BookingUuid, guest_link: GuestLinkUuid) -> Self {
        Self {
            booking,
            guest_link,
            link: guest_link_path(guest_link),
        }
    }
}

/// Public path of a guest link.
#[must_use]
pub fn guest_link_path(guest_link: GuestLinkUuid) -> String {
    format!("/guest/{guest_link}")
}

fn validate_link_stay(booking: &NewBookingLink) -> Result<(), ValidationError> {
    validate_stay(booking.check_in_date, booking.check_out_date)
}

fn validate_direct_stay(booking: &NewDirectBooking) -> Result<(), ValidationError> {
    validate_stay(booking.check_in_date, booking.check_out_date)
}

fn validate_stay(check_in: Date, check_out: Date) -> Result<(), ValidationError> {
    if check_in < check_out {
        return Ok(());
    }

    Err(ValidationError::new("stay_dates").with_message(Cow::Borrowed(
        "Check-out date must be after check-in date.",
    )))
}
