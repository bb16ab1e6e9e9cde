//! Builds the application context from server configuration.

use std::sync::Arc;

use jiff::SignedDuration;
use thiserror::Error;
use tracing::{info, warn};

use innkeep_app::{
    auth::AgencyCredentials,
    content::{AnthropicClient, ContentGenerator, LlmContentGenerator, TemplateContentGenerator},
    context::{AppContext, AppInitError, AppSettings},
    email::{ConsoleEmailSender, EmailError, EmailSender, SmtpEmailSender, SmtpSettings},
};

use crate::config::{ServerConfig, storage::StoreBackend};

#[derive(Debug, Error)]
pub(crate) enum BootstrapError {
    #[error("DATABASE_URL is required for the postgres store")]
    MissingDatabaseUrl,

    #[error("AGENCY_EMAIL and AGENCY_PASSWORD_HASH must be set together")]
    IncompleteAgencyCredentials,

    #[error("access token lifetime must be positive")]
    InvalidTokenTtl,

    #[error("failed to configure SMTP: {0}")]
    Email(#[from] EmailError),

    #[error(transparent)]
    App(#[from] AppInitError),
}

/// Collaborators and settings for the services.
pub(crate) fn app_settings(config: &ServerConfig) -> Result<AppSettings, BootstrapError> {
    let agency = match (&config.auth.agency_email, &config.auth.agency_password_hash) {
        (Some(email), Some(password_hash)) => Some(AgencyCredentials {
            email: email.trim().to_lowercase(),
            password_hash: password_hash.clone(),
        }),
        (None, None) => {
            warn!("agency credentials not configured, agency login is disabled");

            None
        }
        _ => return Err(BootstrapError::IncompleteAgencyCredentials),
    };

    if config.auth.access_token_ttl_hours <= 0 {
        return Err(BootstrapError::InvalidTokenTtl);
    }

    Ok(AppSettings {
        agency,
        token_ttl: SignedDuration::from_hours(config.auth.access_token_ttl_hours),
        direct_booking_status: config.bookings.direct_booking_status.into(),
        content: content_generator(config),
        email: email_sender(config)?,
    })
}

fn content_generator(config: &ServerConfig) -> Arc<dyn ContentGenerator> {
    let Some(api_key) = config.content.anthropic_api_key.clone() else {
        info!("no Anthropic API key configured, using built-in email and policy templates");

        return Arc::new(TemplateContentGenerator::new());
    };

    Arc::new(LlmContentGenerator::new(AnthropicClient::new(
        api_key,
        config.content.anthropic_api_url.clone(),
        config.content.anthropic_model.clone(),
        config.content.anthropic_max_tokens,
    )))
}

fn email_sender(config: &ServerConfig) -> Result<Arc<dyn EmailSender>, EmailError> {
    let Some(host) = config.email.smtp_host.clone() else {
        info!("no SMTP host configured, confirmation emails are logged only");

        return Ok(Arc::new(ConsoleEmailSender::new()));
    };

    Ok(Arc::new(SmtpEmailSender::new(SmtpSettings {
        host,
        port: config.email.smtp_port,
        username: config.email.smtp_username.clone(),
        password: config.email.smtp_password.clone(),
        from_email: config.email.email_from.clone(),
        from_name: config.email.email_from_name.clone(),
    })?))
}

/// Connect the configured document store and build the services over it.
pub(crate) async fn app_context(config: &ServerConfig) -> Result<AppContext, BootstrapError> {
    let settings = app_settings(config)?;

    match config.storage.store {
        StoreBackend::Memory => {
            warn!("using the in-memory store, data is lost on restart");

            Ok(AppContext::in_memory(settings))
        }
        StoreBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .as_deref()
                .ok_or(BootstrapError::MissingDatabaseUrl)?;

            Ok(AppContext::from_database_url(url, config.storage.run_migrations, settings).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use innkeep_app::domain::bookings::records::BookingStatus;

    use super::*;

    fn parse(args: &[&str]) -> Result<ServerConfig, clap::Error> {
        ServerConfig::try_parse_from(std::iter::once("innkeep-json").chain(args.iter().copied()))
    }

    #[test]
    fn agency_credentials_must_be_complete() -> TestResult {
        let config = parse(&["--agency-email", "agency@example.com"])?;

        let result = app_settings(&config);

        assert!(
            matches!(result, Err(BootstrapError::IncompleteAgencyCredentials)),
            "expected IncompleteAgencyCredentials, got {:?}",
            result.err()
        );

        Ok(())
    }

    #[test]
    fn agency_email_is_normalised() -> TestResult {
        let config = parse(&[
            "--agency-email",
            " Agency@Example.com ",
            "--agency-password-hash",
            "sha256$1$00$00",
            "--direct-booking-status",
            "confirmed",
        ])?;

        let settings = app_settings(&config)?;

        assert_eq!(
            settings.agency.map(|agency| agency.email),
            Some("agency@example.com".to_string())
        );
        assert_eq!(settings.direct_booking_status, BookingStatus::Confirmed);

        Ok(())
    }

    #[test]
    fn non_positive_token_ttl_is_rejected() -> TestResult {
        let config = parse(&["--access-token-ttl-hours", "0"])?;

        assert!(
            matches!(app_settings(&config), Err(BootstrapError::InvalidTokenTtl)),
            "zero lifetime rejected"
        );

        Ok(())
    }
}
