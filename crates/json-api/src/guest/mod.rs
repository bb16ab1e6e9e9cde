//! Guest booking completion.
//!
//! These routes are public: possession of the link id is the capability.
//! Outcomes are reported in a `{ success, message }` envelope; a missing or
//! already used link is not an HTTP error.

pub(crate) mod get;
mod responses;
pub(crate) mod submit;

pub(crate) const LINK_NOT_FOUND: &str = "This booking link is invalid or has expired.";
pub(crate) const ALREADY_COMPLETED: &str = "This booking has already been completed.";
pub(crate) const BOOKING_MISSING: &str = "Could not find the associated hotel or booking.";
pub(crate) const BOOKING_UNAVAILABLE: &str = "This booking can no longer be completed.";
pub(crate) const COMPLETED: &str = "Booking completed successfully!";
pub(crate) const SUBMIT_FAILED: &str = "An unexpected error occurred while submitting your booking.";
pub(crate) const LOAD_FAILED: &str = "An unexpected server error occurred.";
