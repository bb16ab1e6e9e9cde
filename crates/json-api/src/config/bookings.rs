//! Bookings Config

use clap::{Args, ValueEnum};
use innkeep_app::domain::bookings::records::BookingStatus;

/// Initial status of bookings entered directly by hotel staff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectBookingStatus {
    /// Wait for the guest to complete the booking form.
    PendingGuest,

    /// Treat the booking as confirmed immediately.
    Confirmed,
}

impl From<DirectBookingStatus> for BookingStatus {
    fn from(status: DirectBookingStatus) -> Self {
        match status {
            DirectBookingStatus::PendingGuest => Self::PendingGuest,
            DirectBookingStatus::Confirmed => Self::Confirmed,
        }
    }
}

/// Booking workflow settings.
#[derive(Debug, Args)]
pub struct BookingsConfig {
    /// Initial status of direct bookings (pending-guest, confirmed)
    #[arg(
        long,
        env = "DIRECT_BOOKING_STATUS",
        value_enum,
        default_value_t = DirectBookingStatus::PendingGuest
    )]
    pub direct_booking_status: DirectBookingStatus,
}
