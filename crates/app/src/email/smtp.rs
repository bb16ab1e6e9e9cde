//! SMTP delivery via lettre.

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use crate::email::{EmailError, EmailSender, OutgoingEmail};

/// Connection and sender settings for [`SmtpEmailSender`].
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: String,
    pub from_name: String,
}

/// Sends email through an SMTP relay.
#[derive(Clone)]
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailSender")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl SmtpEmailSender {
    /// Build a sender over a STARTTLS relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender address is invalid or the relay cannot
    /// be configured.
    pub fn new(settings: SmtpSettings) -> Result<Self, EmailError> {
        let from = parse_mailbox(&format!("{} <{}>", settings.from_name, settings.from_email))?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?.port(settings.port);

        if let (Some(username), Some(password)) = (settings.username, settings.password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, EmailError> {
    address
        .parse()
        .map_err(|source| EmailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html)?;

        self.transport.send(message).await?;

        info!(to = %email.to, "email sent");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: Some("user".to_string()),
            password: Some("secret".to_string()),
            from_email: "bookings@example.com".to_string(),
            from_name: "Innkeep".to_string(),
        }
    }

    #[tokio::test]
    async fn new_accepts_valid_settings() {
        let result = SmtpEmailSender::new(settings());

        assert!(result.is_ok(), "expected Ok, got {result:?}");
    }

    #[tokio::test]
    async fn new_rejects_invalid_sender() {
        let result = SmtpEmailSender::new(SmtpSettings {
            from_email: "not an address".to_string(),
            ..settings()
        });

        assert!(
            matches!(result, Err(EmailError::InvalidAddress { .. })),
            "expected InvalidAddress, got {result:?}"
        );
    }
}
