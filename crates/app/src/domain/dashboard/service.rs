//! Dashboard service.

use async_trait::async_trait;
use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        bookings::records::{BookingRecord, BookingStatus},
        dashboard::{
            errors::DashboardServiceError,
            records::{
                DashboardStats, HotelDashboard, RECENT_ACTIVITY_LIMIT, RecentActivity,
                format_minor_units,
            },
        },
        hotels::records::{HotelRecord, HotelUuid},
    },
    store::{Collection, Direction, Query},
};

const ACTIVITY_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Clone)]
pub struct StoreDashboardService {
    db: Db,
}

impl StoreDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

fn activity_timestamp(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::UTC)
        .strftime(ACTIVITY_TIMESTAMP_FORMAT)
        .to_string()
}

/// Aggregate bookings ordered newest first.
fn summarize(hotel_name: String, bookings: &[BookingRecord]) -> HotelDashboard {
    let confirmed = bookings
        .iter()
        .filter(|booking| booking.status == BookingStatus::Confirmed);

    let revenue = confirmed
        .clone()
        .fold(0_u64, |sum, booking| sum.saturating_add(booking.total_price));

    let stats = DashboardStats {
        total_revenue: format_minor_units(revenue),
        total_bookings: bookings.len(),
        confirmed_bookings: confirmed.count(),
        pending_actions: bookings
            .iter()
            .filter(|booking| booking.status == BookingStatus::PendingGuest)
            .count(),
    };

    let recent_activities = bookings
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(|booking| RecentActivity {
            id: booking.id,
            description: format!("New booking from {}.", booking.guest_name),
            timestamp: activity_timestamp(booking.created_at),
        })
        .collect();

    HotelDashboard {
        hotel_name,
        stats,
        recent_activities,
    }
}

#[async_trait]
impl DashboardService for StoreDashboardService {
    async fn hotel_dashboard(
        &self,
        hotel: HotelUuid,
    ) -> Result<HotelDashboard, DashboardServiceError> {
        let record: HotelRecord = self
            .db
            .get(Collection::Hotels, hotel)
            .await?
            .ok_or(DashboardServiceError::HotelNotFound)?;

        let bookings: Vec<BookingRecord> = self
            .db
            .query(
                Query::new(Collection::Bookings)
                    .filter("hotelId", hotel.to_string())
                    .order_by_created(Direction::Descending),
            )
            .await?;

        debug!(hotel = %hotel, bookings = bookings.len(), "dashboard aggregated");

        Ok(summarize(record.hotel_name, &bookings))
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Summary counters, confirmed revenue and recent activity for a hotel.
    async fn hotel_dashboard(&self, hotel: HotelUuid)
    -> Result<HotelDashboard, DashboardServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::bookings::{BookingsService, StoreBookingsService, data::NewDirectBooking},
        test::{TestContext, create_booking_link, new_direct_booking},
    };

    use super::*;

    #[tokio::test]
    async fn empty_hotel_has_zero_stats() -> TestResult {
        let ctx = TestContext::new().await;

        let dashboard = ctx.dashboard.hotel_dashboard(ctx.hotel).await?;

        assert_eq!(dashboard.hotel_name, "Test Hotel");
        assert_eq!(
            dashboard.stats,
            DashboardStats {
                total_revenue: "0.00".to_string(),
                total_bookings: 0,
                confirmed_bookings: 0,
                pending_actions: 0,
            }
        );
        assert!(dashboard.recent_activities.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn revenue_counts_only_confirmed_bookings() -> TestResult {
        let ctx = TestContext::new().await;
        let confirming = StoreBookingsService::new(ctx.db.clone(), BookingStatus::Confirmed);

        confirming
            .create_direct_booking(ctx.hotel, new_direct_booking())
            .await?;
        confirming
            .create_direct_booking(
                ctx.hotel,
                NewDirectBooking {
                    total_price: 1_999,
                    ..new_direct_booking()
                },
            )
            .await?;

        let cancelled = confirming
            .create_direct_booking(ctx.hotel, new_direct_booking())
            .await?;
        ctx.bookings
            .cancel_booking(ctx.hotel, cancelled.booking)
            .await?;

        ctx.bookings
            .create_direct_booking(ctx.hotel, new_direct_booking())
            .await?;

        let dashboard = ctx.dashboard.hotel_dashboard(ctx.hotel).await?;

        assert_eq!(dashboard.stats.total_revenue, "499.99");
        assert_eq!(dashboard.stats.total_bookings, 4);
        assert_eq!(dashboard.stats.confirmed_bookings, 2);
        assert_eq!(dashboard.stats.pending_actions, 1);

        Ok(())
    }

    #[tokio::test]
    async fn recent_activity_is_newest_first_and_capped() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_other_hotel().await?;

        for n in 0..7 {
            create_booking_link(&ctx, ctx.hotel, &format!("Guest {n}")).await?;
        }
        create_booking_link(&ctx, other, "Elsewhere").await?;

        let dashboard = ctx.dashboard.hotel_dashboard(ctx.hotel).await?;

        let descriptions: Vec<&str> = dashboard
            .recent_activities
            .iter()
            .map(|activity| activity.description.as_str())
            .collect();

        assert_eq!(
            descriptions,
            vec![
                "New booking from Guest 6.",
                "New booking from Guest 5.",
                "New booking from Guest 4.",
                "New booking from Guest 3.",
                "New booking from Guest 2.",
            ]
        );
        assert_eq!(dashboard.stats.total_bookings, 7);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_hotel_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.dashboard.hotel_dashboard(HotelUuid::new()).await;

        assert!(
            matches!(result, Err(DashboardServiceError::HotelNotFound)),
            "expected HotelNotFound, got {result:?}"
        );
    }

    #[test]
    fn activity_timestamps_use_day_month_year() -> TestResult {
        let timestamp: Timestamp = "2025-06-01T09:05:00Z".parse()?;

        assert_eq!(activity_timestamp(timestamp), "01.06.2025 09:05");

        Ok(())
    }
}
