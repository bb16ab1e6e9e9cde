//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig,
    bookings::BookingsConfig,
    content::ContentConfig,
    email::EmailConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::StorageConfig,
};

pub(crate) mod auth;
pub(crate) mod bookings;
pub(crate) mod content;
pub(crate) mod email;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Innkeep JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "innkeep-json", about = "Innkeep JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Document store settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Login and access token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Text generation settings.
    #[command(flatten)]
    pub content: ContentConfig,

    /// Outbound email settings.
    #[command(flatten)]
    pub email: EmailConfig,

    /// Booking workflow settings.
    #[command(flatten)]
    pub bookings: BookingsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
