//! Text generation for guest-facing and agency-facing content.

mod anthropic;
mod errors;
mod llm;
mod prompts;
mod template;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use anthropic::{AnthropicClient, DEFAULT_ANTHROPIC_API_URL, DEFAULT_ANTHROPIC_MODEL};
pub use errors::ContentGenerationError;
pub use llm::LlmContentGenerator;
pub use template::TemplateContentGenerator;

/// Facts a confirmation email is composed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationEmailInput {
    pub guest_name: String,
    pub hotel_name: String,

    /// Pre-formatted, e.g. `June 1, 2025`.
    pub check_in_date: String,

    /// Pre-formatted, e.g. `June 5, 2025`.
    pub check_out_date: String,

    pub booking_details: String,
}

/// Generated confirmation email body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationEmail {
    pub html_content: String,
}

/// Hotel profile the security advisor works from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicyInput {
    #[validate(length(min = 1, message = "Hotel name is required."))]
    pub hotel_name: String,

    #[validate(length(min = 1, message = "Hotel description is required."))]
    pub hotel_description: String,

    #[validate(length(min = 1, message = "Existing security measures are required."))]
    pub existing_security_measures: String,

    #[validate(length(min = 1, message = "Potential threats are required."))]
    pub potential_threats: String,
}

/// Generated security policy recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicy {
    pub policy_recommendations: String,
}

#[automock]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Compose the HTML body of a booking confirmation email.
    async fn confirmation_email(
        &self,
        input: ConfirmationEmailInput,
    ) -> Result<ConfirmationEmail, ContentGenerationError>;

    /// Recommend security policies for a hotel.
    async fn security_policy(
        &self,
        input: SecurityPolicyInput,
    ) -> Result<SecurityPolicy, ContentGenerationError>;
}
