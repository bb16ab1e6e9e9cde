//! Collections

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Top-level document collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Hotels,
    Bookings,
    GuestLinks,
    Rooms,
    AccessTokens,

    /// Index from a normalized hotelier email to its hotel.
    HotelierEmails,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Bookings => "bookings",
            Self::GuestLinks => "guestLinks",
            Self::Rooms => "rooms",
            Self::AccessTokens => "accessTokens",
            Self::HotelierEmails => "hotelierEmails",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
