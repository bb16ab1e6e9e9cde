//! Guest Links Data

use validator::{Validate, ValidationError};

use crate::domain::{
    bookings::records::{BookingRecord, GuestDetails},
    hotels::records::{BankDetails, ContactDetails, HotelRecord, HotelSettings, HotelUuid},
};

/// Details a guest submits through the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct GuestSubmission {
    #[validate(custom(function = "not_blank", message = "First name is required."))]
    pub first_name: String,

    #[validate(custom(function = "not_blank", message = "Last name is required."))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address."))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Phone number is required."))]
    pub phone: String,

    #[validate(url(message = "Invalid document URL."))]
    pub document_url: Option<String>,

    #[validate(url(message = "Invalid payment proof URL."))]
    pub payment_proof_url: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

impl GuestSubmission {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    #[must_use]
    pub fn guest_details(&self) -> GuestDetails {
        GuestDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

/// Hotel fields a guest may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHotel {
    pub id: HotelUuid,
    pub hotel_name: String,
    pub contact: ContactDetails,
    pub full_address: String,
    pub meal_plans: Vec<String>,
    pub room_categories: Vec<String>,
    pub bank_details: BankDetails,
    pub settings: HotelSettings,
}

impl From<HotelRecord> for PublicHotel {
    fn from(hotel: HotelRecord) -> Self {
        Self {
            id: hotel.id,
            hotel_name: hotel.hotel_name,
            contact: hotel.contact,
            full_address: hotel.full_address,
            meal_plans: hotel.meal_plans,
            room_categories: hotel
                .room_categories
                .into_iter()
                .map(|category| category.name)
                .collect(),
            bank_details: hotel.bank_details,
            settings: hotel.settings,
        }
    }
}

/// What a guest sees when opening a link.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestBookingView {
    pub hotel: PublicHotel,
    pub booking: BookingRecord,
}
