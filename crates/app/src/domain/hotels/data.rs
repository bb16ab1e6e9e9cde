//! Hotels Data

use validator::Validate;

use crate::domain::hotels::records::BankDetails;

/// New Hotel Data
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewHotel {
    #[validate(length(min = 3, message = "Hotel name must be at least 3 characters."))]
    pub hotel_name: String,

    pub domain: Option<String>,

    #[validate(email(message = "A valid hotelier email is required."))]
    pub hotelier_email: String,

    /// Plaintext password; only its verifier is persisted.
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub hotelier_password: String,

    #[validate(email(message = "A valid contact email is required."))]
    pub contact_email: String,

    #[validate(length(min = 1, message = "Contact phone is required."))]
    pub contact_phone: String,

    #[validate(length(min = 10, message = "Full address must be at least 10 characters."))]
    pub full_address: String,

    pub meal_plans: Vec<String>,

    #[validate(
        length(min = 1, message = "At least one room category is required."),
        custom(function = "validate_room_categories")
    )]
    pub room_categories: Vec<String>,

    pub bank_details: BankDetails,
}

fn validate_room_categories(categories: &[String]) -> Result<(), validator::ValidationError> {
    if categories.iter().any(|name| name.trim().chars().count() < 2) {
        return Err(validator::ValidationError::new("room_category")
            .with_message("Room category names must be at least 2 characters.".into()));
    }

    Ok(())
}
