//! Email sender that only logs.

use async_trait::async_trait;
use tracing::info;

use crate::email::{EmailError, EmailSender, OutgoingEmail};

const SNIPPET_CHARS: usize = 200;

/// Logs outgoing emails instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn snippet(html: &str) -> String {
    let mut chars = html.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();

    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        info!(
            to = %email.to,
            subject = %email.subject,
            body = %snippet(&email.html),
            "email not delivered, console sender in use"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "é".repeat(SNIPPET_CHARS + 5);

        let short = snippet(&long);

        assert_eq!(short.chars().count(), SNIPPET_CHARS + 3);
        assert!(short.ends_with("..."), "missing ellipsis");
        assert_eq!(snippet("<p>hi</p>"), "<p>hi</p>");
    }

    #[tokio::test]
    async fn send_always_succeeds() {
        let result = ConsoleEmailSender::new()
            .send(OutgoingEmail {
                to: "alice@example.com".to_string(),
                subject: "Hello".to_string(),
                html: "<p>hi</p>".to_string(),
            })
            .await;

        assert!(result.is_ok(), "expected Ok, got {result:?}");
    }
}
