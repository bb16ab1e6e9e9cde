//! Test helpers.

use std::sync::Arc;

use innkeep_app::{
    auth::{MockAuthService, Principal},
    content::MockContentGenerator,
    context::AppContext,
    domain::{
        bookings::MockBookingsService, dashboard::MockDashboardService,
        guest_links::MockGuestLinksService, hotels::MockHotelsService, hotels::records::HotelUuid,
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

/// Services for a handler under test; anything not replaced fails on use.
pub(crate) struct TestState {
    hotels: MockHotelsService,
    bookings: MockBookingsService,
    guest_links: MockGuestLinksService,
    dashboard: MockDashboardService,
    auth: MockAuthService,
    content: MockContentGenerator,
}

impl TestState {
    pub(crate) fn new() -> Self {
        Self {
            hotels: strict_hotels_mock(),
            bookings: strict_bookings_mock(),
            guest_links: strict_guest_links_mock(),
            dashboard: strict_dashboard_mock(),
            auth: strict_auth_mock(),
            content: strict_content_mock(),
        }
    }

    pub(crate) fn with_hotels(self, hotels: MockHotelsService) -> Self {
        Self { hotels, ..self }
    }

    pub(crate) fn with_bookings(self, bookings: MockBookingsService) -> Self {
        Self { bookings, ..self }
    }

    pub(crate) fn with_guest_links(self, guest_links: MockGuestLinksService) -> Self {
        Self {
            guest_links,
            ..self
        }
    }

    pub(crate) fn with_dashboard(self, dashboard: MockDashboardService) -> Self {
        Self { dashboard, ..self }
    }

    pub(crate) fn with_auth(self, auth: MockAuthService) -> Self {
        Self { auth, ..self }
    }

    pub(crate) fn with_content(self, content: MockContentGenerator) -> Self {
        Self { content, ..self }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            hotels: Arc::new(self.hotels),
            bookings: Arc::new(self.bookings),
            guest_links: Arc::new(self.guest_links),
            dashboard: Arc::new(self.dashboard),
            auth: Arc::new(self.auth),
            content: Arc::new(self.content),
        })
    }
}

/// Places a fixed principal in the depot, standing in for the auth middleware.
pub(crate) struct InjectPrincipal(pub(crate) Principal);

#[salvo::handler]
impl InjectPrincipal {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_principal(self.0);
        ctrl.call_next(req, depot, res).await;
    }
}

/// Service with no principal, as seen by guests and login routes.
pub(crate) fn public_service(state: TestState, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state.into_state()))
            .push(route),
    )
}

/// Service authenticated as agency staff.
pub(crate) fn agency_service(state: TestState, route: Router) -> Service {
    principal_service(state, Principal::Agency, route)
}

/// Service authenticated as the hotelier of `hotel`.
pub(crate) fn hotelier_service(state: TestState, hotel: HotelUuid, route: Router) -> Service {
    principal_service(state, Principal::Hotelier { hotel }, route)
}

fn principal_service(state: TestState, principal: Principal, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state.into_state()))
            .hoop(InjectPrincipal(principal))
            .push(route),
    )
}

fn strict_hotels_mock() -> MockHotelsService {
    let mut hotels = MockHotelsService::new();

    hotels.expect_create_hotel().never();
    hotels.expect_list_hotels().never();
    hotels.expect_get_hotel().never();
    hotels.expect_list_rooms().never();

    hotels
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking_link().never();
    bookings.expect_create_direct_booking().never();
    bookings.expect_list_bookings().never();
    bookings.expect_get_booking().never();
    bookings.expect_cancel_booking().never();

    bookings
}

fn strict_guest_links_mock() -> MockGuestLinksService {
    let mut guest_links = MockGuestLinksService::new();

    guest_links.expect_get_guest_booking().never();
    guest_links.expect_submit_guest_booking().never();

    guest_links
}

fn strict_dashboard_mock() -> MockDashboardService {
    let mut dashboard = MockDashboardService::new();

    dashboard.expect_hotel_dashboard().never();

    dashboard
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login_agency().never();
    auth.expect_login_hotelier().never();
    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_content_mock() -> MockContentGenerator {
    let mut content = MockContentGenerator::new();

    content.expect_confirmation_email().never();
    content.expect_security_policy().never();

    content
}
