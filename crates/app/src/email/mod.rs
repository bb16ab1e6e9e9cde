//! Outbound email delivery.

mod console;
mod errors;
mod smtp;

use async_trait::async_trait;
use mockall::automock;

pub use console::ConsoleEmailSender;
pub use errors::EmailError;
pub use smtp::{SmtpEmailSender, SmtpSettings};

/// A single HTML email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[automock]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver `email`.
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError>;
}
