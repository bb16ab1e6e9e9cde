//! Offline content generation from fixed templates.

use async_trait::async_trait;
use validator::Validate;

use crate::content::{
    ConfirmationEmail, ConfirmationEmailInput, ContentGenerationError, ContentGenerator,
    SecurityPolicy, SecurityPolicyInput,
};

/// Renders content without calling out to a language model.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContentGenerator;

impl TemplateContentGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

#[async_trait]
impl ContentGenerator for TemplateContentGenerator {
    async fn confirmation_email(
        &self,
        input: ConfirmationEmailInput,
    ) -> Result<ConfirmationEmail, ContentGenerationError> {
        let hotel = escape_html(&input.hotel_name);

        let html_content = format!(
            "<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>Your Booking at {hotel} is Confirmed!</title>\n</head>\n\
             <body style=\"font-family: Arial, sans-serif; line-height: 1.6; color: #333;\">\n\
             <div style=\"max-width: 600px; margin: 0 auto; padding: 20px;\">\n\
             <h2>Dear {guest},</h2>\n\
             <p>Thank you for completing your booking at <strong>{hotel}</strong>. We look forward to welcoming you.</p>\n\
             <table>\n\
             <tr><td>Check-in</td><td>{check_in}</td></tr>\n\
             <tr><td>Check-out</td><td>{check_out}</td></tr>\n\
             </table>\n\
             <p>{details}</p>\n\
             </div>\n</body>\n</html>",
            guest = escape_html(&input.guest_name),
            check_in = escape_html(&input.check_in_date),
            check_out = escape_html(&input.check_out_date),
            details = escape_html(&input.booking_details),
        );

        Ok(ConfirmationEmail { html_content })
    }

    async fn security_policy(
        &self,
        input: SecurityPolicyInput,
    ) -> Result<SecurityPolicy, ContentGenerationError> {
        input.validate()?;

        let recommendations: Vec<String> = [
            "Review access control for guest floors, service areas and back offices, and log key card issuance.",
            "Train front desk staff to verify guest identity before sharing room numbers or issuing duplicate keys.",
            "Maintain CCTV coverage of entrances, car parks and corridors, with a documented retention period.",
            "Run an incident response drill at least twice a year and keep emergency contacts current.",
        ]
        .iter()
        .enumerate()
        .map(|(n, item)| format!("{}. {item}", n + 1))
        .collect();

        let policy = format!(
            "Security policy recommendations for {}:\n{}\n\nAddress the identified threats ({}) against the existing measures ({}).",
            input.hotel_name,
            recommendations.join("\n"),
            input.potential_threats.trim(),
            input.existing_security_measures.trim()
        );

        Ok(SecurityPolicy {
            policy_recommendations: policy,
        })
    }
}
