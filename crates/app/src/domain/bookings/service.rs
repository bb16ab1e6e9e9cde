//! Bookings service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::{error, info};
use validator::Validate;

use crate::{
    database::Db,
    domain::{
        bookings::{
            data::{IssuedBookingLink, NewBookingLink, NewDirectBooking},
            errors::BookingsServiceError,
            records::{BookingRecord, BookingStatus, BookingUuid, RoomSelection},
        },
        guest_links::records::{GuestLinkRecord, GuestLinkUuid},
        hotels::records::{HotelRecord, HotelUuid},
    },
    store::{Collection, Direction, Patch, Precondition, Query, WriteBatch},
};

#[derive(Debug, Clone)]
pub struct StoreBookingsService {
    db: Db,
    direct_booking_status: BookingStatus,
}

impl StoreBookingsService {
    /// `direct_booking_status` is the initial status of staff-entered bookings.
    #[must_use]
    pub fn new(db: Db, direct_booking_status: BookingStatus) -> Self {
        Self {
            db,
            direct_booking_status,
        }
    }

    async fn require_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, BookingsServiceError> {
        self.db
            .get(Collection::Hotels, hotel)
            .await?
            .ok_or(BookingsServiceError::HotelNotFound)
    }

    /// Write a booking and its guest link in one batch.
    async fn issue(
        &self,
        hotel: &HotelRecord,
        booking: BookingRecord,
    ) -> Result<IssuedBookingLink, BookingsServiceError> {
        let now = Timestamp::now();

        let expires_at = now
            .checked_add(SignedDuration::from_hours(i64::from(
                hotel.settings.booking_link_expiry_hours,
            )))
            .ok();

        let link = GuestLinkRecord {
            id: booking.guest_link_id,
            booking_id: booking.id,
            hotel_id: hotel.id,
            is_completed: false,
            completed_at: None,
            expires_at,
            created_at: now,
        };

        let mut batch = WriteBatch::new();
        batch.create(Collection::Bookings, booking.id, &booking)?;
        batch.create(Collection::GuestLinks, link.id, &link)?;

        self.db.commit(batch).await.map_err(|source| {
            error!(hotel = %hotel.id, "failed to issue booking link: {source}");

            BookingsServiceError::from(source)
        })?;

        info!(
            hotel = %hotel.id,
            booking = %booking.id,
            guest_link = %link.id,
            status = %booking.status,
            "booking link issued"
        );

        Ok(IssuedBookingLink::new(booking.id, link.id))
    }
}

#[async_trait]
impl BookingsService for StoreBookingsService {
    async fn create_booking_link(
        &self,
        hotel: HotelUuid,
        booking: NewBookingLink,
    ) -> Result<IssuedBookingLink, BookingsServiceError> {
        booking.validate()?;

        let hotel = self.require_hotel(hotel).await?;
        let now = Timestamp::now();

        let record = BookingRecord {
            id: BookingUuid::new(),
            hotel_id: hotel.id,
            guest_name: booking.guest_name.trim().to_string(),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            rooms: vec![RoomSelection {
                room_type: booking.room_type,
                adults: 0,
                children: 0,
                toddlers: 0,
                child_ages: Vec::new(),
            }],
            meal_plan: None,
            language: booking.language,
            total_price: booking.total_price.unwrap_or_default(),
            status: BookingStatus::PendingGuest,
            guest_link_id: GuestLinkUuid::new(),
            guest_details: None,
            document_url: None,
            payment_proof_url: None,
            internal_notes: None,
            created_at: now,
            updated_at: now,
        };

        self.issue(&hotel, record).await
    }

    async fn create_direct_booking(
        &self,
        hotel: HotelUuid,
        booking: NewDirectBooking,
    ) -> Result<IssuedBookingLink, BookingsServiceError> {
        booking.validate()?;

        let hotel = self.require_hotel(hotel).await?;
        let now = Timestamp::now();

        let record = BookingRecord {
            id: BookingUuid::new(),
            hotel_id: hotel.id,
            guest_name: format!("{} {}", booking.first_name.trim(), booking.last_name.trim()),
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            rooms: booking.rooms,
            meal_plan: booking.meal_plan,
            language: booking.language,
            total_price: booking.total_price,
            status: self.direct_booking_status,
            guest_link_id: GuestLinkUuid::new(),
            guest_details: None,
            document_url: None,
            payment_proof_url: None,
            internal_notes: booking.internal_notes,
            created_at: now,
            updated_at: now,
        };

        self.issue(&hotel, record).await
    }

    async fn list_bookings(
        &self,
        hotel: HotelUuid,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        Ok(self
            .db
            .query(
                Query::new(Collection::Bookings)
                    .filter("hotelId", hotel.to_string())
                    .order_by_created(Direction::Descending),
            )
            .await?)
    }

    async fn get_booking(
        &self,
        hotel: HotelUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.db
            .get::<BookingRecord>(Collection::Bookings, booking)
            .await?
            .filter(|record| record.hotel_id == hotel)
            .ok_or(BookingsServiceError::NotFound)
    }

    async fn cancel_booking(
        &self,
        hotel: HotelUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let current = self.get_booking(hotel, booking).await?;

        if !current.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(BookingsServiceError::InvalidTransition {
                from: current.status,
                to: BookingStatus::Cancelled,
            });
        }

        let mut batch = WriteBatch::new();
        batch.update_if(
            Collection::Bookings,
            booking,
            Patch::new().set("status", BookingStatus::Cancelled.as_str()),
            Precondition::field_equals("status", current.status.as_str()),
        );

        self.db.commit(batch).await?;

        info!(hotel = %hotel, booking = %booking, from = %current.status, "booking cancelled");

        self.get_booking(hotel, booking).await
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Creates a `pending_guest` booking and its single-use guest link atomically.
    async fn create_booking_link(
        &self,
        hotel: HotelUuid,
        booking: NewBookingLink,
    ) -> Result<IssuedBookingLink, BookingsServiceError>;

    /// Creates a fully specified booking and its guest link atomically.
    async fn create_direct_booking(
        &self,
        hotel: HotelUuid,
        booking: NewDirectBooking,
    ) -> Result<IssuedBookingLink, BookingsServiceError>;

    /// Lists a hotel's bookings, newest first.
    async fn list_bookings(&self, hotel: HotelUuid)
    -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Retrieve a single booking owned by `hotel`.
    async fn get_booking(
        &self,
        hotel: HotelUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Moves a booking to `cancelled`.
    async fn cancel_booking(
        &self,
        hotel: HotelUuid,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        domain::guest_links::records::GuestLinkRecord,
        test::{TestContext, create_booking_link, new_booking_link, new_direct_booking},
    };

    use super::*;

    #[tokio::test]
    async fn create_booking_link_cross_references_booking_and_link() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx
            .bookings
            .create_booking_link(ctx.hotel, new_booking_link("Alice Doe"))
            .await?;

        let booking = ctx.bookings.get_booking(ctx.hotel, issued.booking).await?;

        let link: GuestLinkRecord = ctx
            .db
            .get(Collection::GuestLinks, issued.guest_link)
            .await?
            .ok_or("guest link missing")?;

        assert_eq!(booking.guest_link_id, link.id);
        assert_eq!(link.booking_id, booking.id);
        assert_eq!(link.hotel_id, ctx.hotel);
        assert!(!link.is_completed);
        assert_eq!(booking.status, BookingStatus::PendingGuest);
        assert_eq!(booking.check_in_date, date(2025, 6, 1));
        assert_eq!(booking.check_out_date, date(2025, 6, 5));
        assert_eq!(issued.link, format!("/guest/{}", link.id));
        assert!(issued.link.contains(&link.id.to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_link_sets_expiry_from_hotel_settings() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let link: GuestLinkRecord = ctx
            .db
            .get(Collection::GuestLinks, issued.guest_link)
            .await?
            .ok_or("guest link missing")?;

        let expires_at = link.expires_at.ok_or("expiry missing")?;

        let drift = expires_at.duration_since(link.created_at) - SignedDuration::from_hours(48);

        assert!(
            drift.abs() < SignedDuration::from_secs(60),
            "links expire after the hotel's configured window, drift {drift:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_link_for_unknown_hotel_writes_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let unknown = HotelUuid::new();

        let result = ctx
            .bookings
            .create_booking_link(unknown, new_booking_link("Alice Doe"))
            .await;

        assert!(
            matches!(result, Err(BookingsServiceError::HotelNotFound)),
            "expected HotelNotFound, got {result:?}"
        );
        assert!(ctx.bookings.list_bookings(unknown).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn create_booking_link_rejects_inverted_stay() {
        let ctx = TestContext::new().await;

        let result = ctx
            .bookings
            .create_booking_link(
                ctx.hotel,
                NewBookingLink {
                    check_in_date: date(2025, 6, 5),
                    check_out_date: date(2025, 6, 1),
                    ..new_booking_link("Alice Doe")
                },
            )
            .await;

        assert!(
            matches!(result, Err(BookingsServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_direct_booking_uses_configured_initial_status() -> TestResult {
        let ctx = TestContext::new().await;
        let confirming = StoreBookingsService::new(ctx.db.clone(), BookingStatus::Confirmed);

        let pending = ctx
            .bookings
            .create_direct_booking(ctx.hotel, new_direct_booking())
            .await?;
        let confirmed = confirming
            .create_direct_booking(ctx.hotel, new_direct_booking())
            .await?;

        let pending = ctx.bookings.get_booking(ctx.hotel, pending.booking).await?;
        let confirmed = ctx.bookings.get_booking(ctx.hotel, confirmed.booking).await?;

        assert_eq!(pending.status, BookingStatus::PendingGuest);
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert_eq!(pending.guest_name, "Alice Doe");
        assert_eq!(pending.total_price, 48_000);
        assert_eq!(pending.summary(), "Booking for 2 room(s): Double, Suite.");

        Ok(())
    }

    #[tokio::test]
    async fn list_bookings_is_hotel_scoped_and_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_other_hotel().await?;

        let first = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;
        let second = create_booking_link(&ctx, ctx.hotel, "Bob Roe").await?;
        create_booking_link(&ctx, other, "Carol Poe").await?;

        let bookings = ctx.bookings.list_bookings(ctx.hotel).await?;
        let ids: Vec<BookingUuid> = bookings.iter().map(|booking| booking.id).collect();

        assert_eq!(ids, vec![second.booking, first.booking]);

        Ok(())
    }

    #[tokio::test]
    async fn get_booking_of_another_hotel_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let other = ctx.create_other_hotel().await?;

        let issued = create_booking_link(&ctx, other, "Carol Poe").await?;

        let result = ctx.bookings.get_booking(ctx.hotel, issued.booking).await;

        assert!(
            matches!(result, Err(BookingsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn cancel_booking_is_terminal() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let cancelled = ctx.bookings.cancel_booking(ctx.hotel, issued.booking).await?;

        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let again = ctx.bookings.cancel_booking(ctx.hotel, issued.booking).await;

        assert!(
            matches!(
                again,
                Err(BookingsServiceError::InvalidTransition {
                    from: BookingStatus::Cancelled,
                    to: BookingStatus::Cancelled,
                })
            ),
            "expected InvalidTransition, got {again:?}"
        );

        Ok(())
    }
}
