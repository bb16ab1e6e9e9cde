//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AgencyCredentials, AuthService, StoreAuthService},
    content::ContentGenerator,
    database::{self, Db},
    domain::{
        bookings::{BookingsService, StoreBookingsService, records::BookingStatus},
        dashboard::{DashboardService, StoreDashboardService},
        guest_links::{GuestLinksService, StoreGuestLinksService},
        hotels::{HotelsService, StoreHotelsService},
    },
    email::EmailSender,
    store::{DocumentStore, MemoryDocumentStore, PgDocumentStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrate(#[source] MigrateError),
}

/// Settings and collaborators the services are built from.
#[derive(Clone)]
pub struct AppSettings {
    pub agency: Option<AgencyCredentials>,
    pub token_ttl: SignedDuration,
    pub direct_booking_status: BookingStatus,
    pub content: Arc<dyn ContentGenerator>,
    pub email: Arc<dyn EmailSender>,
}

#[derive(Clone)]
pub struct AppContext {
    pub hotels: Arc<dyn HotelsService>,
    pub bookings: Arc<dyn BookingsService>,
    pub guest_links: Arc<dyn GuestLinksService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub auth: Arc<dyn AuthService>,
    pub content: Arc<dyn ContentGenerator>,
}

impl AppContext {
    /// Build application context over any document store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, settings: AppSettings) -> Self {
        let db = Db::new(store);

        Self {
            hotels: Arc::new(StoreHotelsService::new(db.clone())),
            bookings: Arc::new(StoreBookingsService::new(
                db.clone(),
                settings.direct_booking_status,
            )),
            guest_links: Arc::new(StoreGuestLinksService::new(
                db.clone(),
                settings.content.clone(),
                settings.email,
            )),
            dashboard: Arc::new(StoreDashboardService::new(db.clone())),
            auth: Arc::new(StoreAuthService::new(db, settings.agency, settings.token_ttl)),
            content: settings.content,
        }
    }

    /// Build application context over a process-local store.
    #[must_use]
    pub fn in_memory(settings: AppSettings) -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()), settings)
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        run_migrations: bool,
        settings: AppSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::new(Arc::new(PgDocumentStore::new(pool)), settings))
    }
}
