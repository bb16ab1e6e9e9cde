//! Guest links service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Timestamp, civil::Date};
use mockall::automock;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    content::{ConfirmationEmailInput, ContentGenerator},
    database::Db,
    domain::{
        bookings::records::{BookingRecord, BookingStatus},
        guest_links::{
            data::{GuestBookingView, GuestSubmission},
            errors::GuestLinksServiceError,
            records::{GuestLinkRecord, GuestLinkUuid},
        },
        hotels::records::HotelRecord,
    },
    email::{EmailSender, OutgoingEmail},
    store::{Collection, Patch, Precondition, StoreError, WriteBatch},
};

/// Format used for stay dates in guest-facing text, e.g. `June 1, 2025`.
const GUEST_DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Clone)]
pub struct StoreGuestLinksService {
    db: Db,
    content: Arc<dyn ContentGenerator>,
    email: Arc<dyn EmailSender>,
}

impl std::fmt::Debug for StoreGuestLinksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreGuestLinksService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl StoreGuestLinksService {
    #[must_use]
    pub fn new(db: Db, content: Arc<dyn ContentGenerator>, email: Arc<dyn EmailSender>) -> Self {
        Self { db, content, email }
    }

    async fn open_link(&self, link: GuestLinkUuid) -> Result<GuestLinkRecord, GuestLinksServiceError> {
        let record: GuestLinkRecord = self
            .db
            .get(Collection::GuestLinks, link)
            .await?
            .ok_or(GuestLinksServiceError::LinkNotFound)?;

        if record.is_completed {
            return Err(GuestLinksServiceError::AlreadyCompleted);
        }

        Ok(record)
    }

    /// Load the hotel and booking a link points at, never trusting caller ids.
    async fn resolve(
        &self,
        link: &GuestLinkRecord,
    ) -> Result<(HotelRecord, BookingRecord), GuestLinksServiceError> {
        let hotel: Option<HotelRecord> = self.db.get(Collection::Hotels, link.hotel_id).await?;
        let booking: Option<BookingRecord> =
            self.db.get(Collection::Bookings, link.booking_id).await?;

        match (hotel, booking) {
            (Some(hotel), Some(booking)) if booking.hotel_id == hotel.id => Ok((hotel, booking)),
            _ => {
                warn!(
                    guest_link = %link.id,
                    hotel = %link.hotel_id,
                    booking = %link.booking_id,
                    "guest link references a missing hotel or booking"
                );

                Err(GuestLinksServiceError::BookingMissing)
            }
        }
    }

    /// Generate and send the confirmation email. Failures are logged only.
    async fn send_confirmation(&self, hotel: &HotelRecord, booking: &BookingRecord, to: &str) {
        let input = ConfirmationEmailInput {
            guest_name: booking.guest_name.clone(),
            hotel_name: hotel.hotel_name.clone(),
            check_in_date: format_guest_date(booking.check_in_date),
            check_out_date: format_guest_date(booking.check_out_date),
            booking_details: booking.summary(),
        };

        let email = match self.content.confirmation_email(input).await {
            Ok(email) => email,
            Err(source) => {
                warn!(booking = %booking.id, "failed to generate confirmation email: {source}");

                return;
            }
        };

        let outgoing = OutgoingEmail {
            to: to.to_string(),
            subject: confirmation_subject(&hotel.hotel_name),
            html: email.html_content,
        };

        match self.email.send(outgoing).await {
            Ok(()) => info!(booking = %booking.id, "confirmation email sent"),
            Err(source) => {
                warn!(booking = %booking.id, "failed to send confirmation email: {source}");
            }
        }
    }
}

fn format_guest_date(date: Date) -> String {
    date.strftime(GUEST_DATE_FORMAT).to_string()
}

fn confirmation_subject(hotel_name: &str) -> String {
    format!("Your Booking at {hotel_name} is Confirmed!")
}

#[async_trait]
impl GuestLinksService for StoreGuestLinksService {
    async fn get_guest_booking(
        &self,
        link: GuestLinkUuid,
    ) -> Result<GuestBookingView, GuestLinksServiceError> {
        let record = self.open_link(link).await?;
        let (hotel, booking) = self.resolve(&record).await?;

        if booking.status == BookingStatus::Cancelled {
            return Err(GuestLinksServiceError::BookingUnavailable);
        }

        Ok(GuestBookingView {
            hotel: hotel.into(),
            booking,
        })
    }

    async fn submit_guest_booking(
        &self,
        link: GuestLinkUuid,
        submission: GuestSubmission,
    ) -> Result<BookingRecord, GuestLinksServiceError> {
        submission.validate()?;

        let record = self.open_link(link).await?;
        let (hotel, booking) = self.resolve(&record).await?;

        if booking.status == BookingStatus::Cancelled {
            return Err(GuestLinksServiceError::BookingUnavailable);
        }

        let details = submission.guest_details();
        let details_value = serde_json::to_value(&details).map_err(StoreError::from)?;
        let read_status = booking.status;

        let confirmed = BookingRecord {
            status: BookingStatus::Confirmed,
            guest_name: submission.full_name(),
            guest_details: Some(details),
            document_url: submission.document_url.clone().or(booking.document_url),
            payment_proof_url: submission
                .payment_proof_url
                .clone()
                .or(booking.payment_proof_url),
            updated_at: Timestamp::now(),
            ..booking
        };

        let mut batch = WriteBatch::new();

        batch.update_if(
            Collection::GuestLinks,
            record.id,
            Patch::new()
                .set("isCompleted", true)
                .server_timestamp("completedAt"),
            Precondition::field_equals("isCompleted", false),
        );

        batch.update_if(
            Collection::Bookings,
            confirmed.id,
            Patch::new()
                .set("status", BookingStatus::Confirmed.as_str())
                .set("guestName", confirmed.guest_name.clone())
                .set("guestDetails", details_value)
                .set_some("documentUrl", submission.document_url.clone())
                .set_some("paymentProofUrl", submission.payment_proof_url.clone()),
            Precondition::field_equals("status", read_status.as_str()),
        );

        self.db.commit(batch).await.map_err(|source| {
            let error = GuestLinksServiceError::from(source);

            match &error {
                GuestLinksServiceError::Store(source) => {
                    error!(guest_link = %link, booking = %confirmed.id, "failed to complete guest booking: {source}");
                }
                other => {
                    info!(guest_link = %link, booking = %confirmed.id, "guest booking rejected at commit: {other}");
                }
            }

            error
        })?;

        info!(
            guest_link = %link,
            hotel = %hotel.id,
            booking = %confirmed.id,
            "guest booking completed"
        );

        self.send_confirmation(&hotel, &confirmed, &submission.email)
            .await;

        Ok(confirmed)
    }
}

#[automock]
#[async_trait]
pub trait GuestLinksService: Send + Sync {
    /// Resolve an open guest link to the booking and the public hotel view.
    async fn get_guest_booking(
        &self,
        link: GuestLinkUuid,
    ) -> Result<GuestBookingView, GuestLinksServiceError>;

    /// Complete a booking from the guest form.
    ///
    /// The link is consumed and the booking confirmed in one atomic commit
    /// whose preconditions guarantee at most one success per link.
    async fn submit_guest_booking(
        &self,
        link: GuestLinkUuid,
        submission: GuestSubmission,
    ) -> Result<BookingRecord, GuestLinksServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        content::{ContentGenerationError, MockContentGenerator},
        domain::{
            bookings::{BookingsService, records::GuestDetails},
            dashboard::DashboardService,
        },
        email::{EmailError, MockEmailSender},
        store::MockDocumentStore,
        test::{
            BarrierStore, ReadsFailAfterCommit, TestContext, create_booking_link,
            guest_submission,
        },
    };

    use super::*;

    #[tokio::test]
    async fn guest_completion_confirms_booking_and_consumes_link() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let booking = ctx
            .guest_links
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(
            booking.guest_details,
            Some(GuestDetails {
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                email: "alice@example.com".to_string(),
                phone: "+1-555".to_string(),
            })
        );
        assert_eq!(booking.guest_name, "Alice Doe");

        let link: GuestLinkRecord = ctx
            .db
            .get(Collection::GuestLinks, issued.guest_link)
            .await?
            .ok_or("guest link missing")?;

        assert!(link.is_completed);
        assert!(link.completed_at.is_some(), "completion time stamped");

        let dashboard = ctx.dashboard.hotel_dashboard(ctx.hotel).await?;

        assert_eq!(dashboard.stats.total_bookings, 1);
        assert_eq!(dashboard.stats.confirmed_bookings, 1);
        assert_eq!(dashboard.stats.pending_actions, 0);

        Ok(())
    }

    #[tokio::test]
    async fn guest_completion_sends_confirmation_email() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        ctx.guest_links
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        let sent = ctx.outbox.sent().await;
        let [email] = sent.as_slice() else {
            return Err(format!("expected one email, got {sent:?}").into());
        };

        assert_eq!(email.to, "alice@example.com");
        assert_eq!(email.subject, "Your Booking at Test Hotel is Confirmed!");
        assert!(email.html.contains("June 1, 2025"), "check-in missing");
        assert!(email.html.contains("June 5, 2025"), "check-out missing");
        assert!(
            email.html.contains("Booking for 1 room(s): Suite."),
            "summary missing"
        );

        Ok(())
    }

    #[tokio::test]
    async fn second_submission_reports_already_completed_and_changes_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        ctx.guest_links
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        let booking_before = ctx.bookings.get_booking(ctx.hotel, issued.booking).await?;
        let link_before: Option<GuestLinkRecord> =
            ctx.db.get(Collection::GuestLinks, issued.guest_link).await?;

        let result = ctx
            .guest_links
            .submit_guest_booking(
                issued.guest_link,
                GuestSubmission {
                    first_name: "Mallory".to_string(),
                    ..guest_submission()
                },
            )
            .await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::AlreadyCompleted)),
            "expected AlreadyCompleted, got {result:?}"
        );

        let booking_after = ctx.bookings.get_booking(ctx.hotel, issued.booking).await?;
        let link_after: Option<GuestLinkRecord> =
            ctx.db.get(Collection::GuestLinks, issued.guest_link).await?;

        assert_eq!(booking_after, booking_before);
        assert_eq!(link_after, link_before);
        assert_eq!(ctx.outbox.sent().await.len(), 1, "only one email sent");

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submissions_complete_exactly_once() -> TestResult {
        const SUBMISSIONS: usize = 16;

        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        // Every submission reads the open link before any of them commits.
        let gated = Db::new(Arc::new(BarrierStore::new(
            ctx.store.clone(),
            Collection::GuestLinks,
            SUBMISSIONS,
        )));

        let service = StoreGuestLinksService::new(
            gated,
            ctx.content.clone(),
            Arc::new(ctx.outbox.clone()),
        );

        let mut handles = Vec::new();

        for _ in 0..SUBMISSIONS {
            let service = service.clone();
            let link = issued.guest_link;

            handles.push(tokio::spawn(async move {
                service.submit_guest_booking(link, guest_submission()).await
            }));
        }

        let mut successes = 0;
        let mut already_completed = 0;

        for handle in handles {
            match handle.await? {
                Ok(_) => successes += 1,
                Err(GuestLinksServiceError::AlreadyCompleted) => already_completed += 1,
                Err(other) => return Err(format!("unexpected error {other:?}").into()),
            }
        }

        assert_eq!(successes, 1, "exactly one submission may succeed");
        assert_eq!(already_completed, SUBMISSIONS - 1, "the rest see a consumed link");
        assert_eq!(ctx.outbox.sent().await.len(), 1, "exactly one email sent");

        Ok(())
    }

    #[tokio::test]
    async fn failed_read_after_commit_still_reports_success() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let service = StoreGuestLinksService::new(
            Db::new(Arc::new(ReadsFailAfterCommit::new(
                ctx.store.clone(),
                Collection::Bookings,
            ))),
            ctx.content.clone(),
            Arc::new(ctx.outbox.clone()),
        );

        let booking = service
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        assert_eq!(booking.id, issued.booking);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.guest_name, "Alice Doe");

        let stored = ctx.bookings.get_booking(ctx.hotel, issued.booking).await?;

        assert_eq!(stored.status, BookingStatus::Confirmed);
        assert_eq!(stored.guest_details, booking.guest_details);
        assert_eq!(ctx.outbox.sent().await.len(), 1, "confirmation email sent");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_link_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .guest_links
            .submit_guest_booking(GuestLinkUuid::new(), guest_submission())
            .await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::LinkNotFound)),
            "expected LinkNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_link_performs_no_writes() {
        let mut store = MockDocumentStore::new();

        store.expect_get().returning(|_, _| Ok(None));
        store.expect_commit().never();

        let mut content = MockContentGenerator::new();
        content.expect_confirmation_email().never();

        let mut email = MockEmailSender::new();
        email.expect_send().never();

        let service = StoreGuestLinksService::new(
            Db::new(Arc::new(store)),
            Arc::new(content),
            Arc::new(email),
        );

        let result = service
            .submit_guest_booking(GuestLinkUuid::new(), guest_submission())
            .await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::LinkNotFound)),
            "expected LinkNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn invalid_submission_is_rejected_before_lookup() {
        let mut store = MockDocumentStore::new();

        store.expect_get().never();
        store.expect_commit().never();

        let service = StoreGuestLinksService::new(
            Db::new(Arc::new(store)),
            Arc::new(MockContentGenerator::new()),
            Arc::new(MockEmailSender::new()),
        );

        let result = service
            .submit_guest_booking(
                GuestLinkUuid::new(),
                GuestSubmission {
                    email: "not-an-email".to_string(),
                    ..guest_submission()
                },
            )
            .await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn email_failures_do_not_fail_the_submission() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let mut content = MockContentGenerator::new();
        content
            .expect_confirmation_email()
            .times(1)
            .returning(|_| Err(ContentGenerationError::RateLimited));

        let service = StoreGuestLinksService::new(
            ctx.db.clone(),
            Arc::new(content),
            Arc::new(MockEmailSender::new()),
        );

        let booking = service
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        assert_eq!(booking.status, BookingStatus::Confirmed);

        Ok(())
    }

    #[tokio::test]
    async fn send_failures_do_not_fail_the_submission() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let mut email = MockEmailSender::new();
        email.expect_send().times(1).returning(|message| {
            Err(EmailError::InvalidAddress {
                address: message.to,
                source: lettre::address::AddressError::MissingParts,
            })
        });

        let service = StoreGuestLinksService::new(
            ctx.db.clone(),
            ctx.content.clone(),
            Arc::new(email),
        );

        let booking = service
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        assert_eq!(booking.status, BookingStatus::Confirmed);

        Ok(())
    }

    #[tokio::test]
    async fn cancelled_booking_cannot_be_completed() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        ctx.bookings.cancel_booking(ctx.hotel, issued.booking).await?;

        let result = ctx
            .guest_links
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::BookingUnavailable)),
            "expected BookingUnavailable, got {result:?}"
        );

        let link: GuestLinkRecord = ctx
            .db
            .get(Collection::GuestLinks, issued.guest_link)
            .await?
            .ok_or("guest link missing")?;

        assert!(!link.is_completed, "link stays open");

        Ok(())
    }

    #[tokio::test]
    async fn cancelled_booking_is_unavailable_when_opened() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        ctx.bookings.cancel_booking(ctx.hotel, issued.booking).await?;

        let result = ctx.guest_links.get_guest_booking(issued.guest_link).await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::BookingUnavailable)),
            "expected BookingUnavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_guest_booking_hides_credentials() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = create_booking_link(&ctx, ctx.hotel, "Alice Doe").await?;

        let view = ctx.guest_links.get_guest_booking(issued.guest_link).await?;

        assert_eq!(view.hotel.id, ctx.hotel);
        assert_eq!(view.booking.id, issued.booking);
        assert_eq!(view.booking.check_in_date, date(2025, 6, 1));

        ctx.guest_links
            .submit_guest_booking(issued.guest_link, guest_submission())
            .await?;

        let result = ctx.guest_links.get_guest_booking(issued.guest_link).await;

        assert!(
            matches!(result, Err(GuestLinksServiceError::AlreadyCompleted)),
            "expected AlreadyCompleted, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn guest_dates_are_spelled_out() {
        assert_eq!(format_guest_date(date(2025, 6, 1)), "June 1, 2025");
        assert_eq!(format_guest_date(date(2025, 12, 24)), "December 24, 2025");
    }
}
