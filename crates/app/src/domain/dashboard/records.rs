//! Dashboard Records

use crate::domain::bookings::records::BookingUuid;

/// Number of bookings listed under recent activity.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Summary of a hotel's bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelDashboard {
    pub hotel_name: String,
    pub stats: DashboardStats,
    pub recent_activities: Vec<RecentActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Confirmed revenue with two decimals, e.g. `"480.00"`.
    pub total_revenue: String,
    pub total_bookings: usize,
    pub confirmed_bookings: usize,

    /// Bookings still waiting for the guest.
    pub pending_actions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentActivity {
    pub id: BookingUuid,
    pub description: String,

    /// `dd.MM.yyyy HH:mm` in UTC.
    pub timestamp: String,
}

/// Render minor currency units with two decimals.
#[must_use]
pub fn format_minor_units(amount: u64) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}
