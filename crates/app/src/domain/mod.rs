//! Innkeep Domain Concerns

pub mod bookings;
pub mod dashboard;
pub mod guest_links;
pub mod hotels;
