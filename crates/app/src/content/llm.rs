//! Content generation backed by a language model.

use async_trait::async_trait;
use tracing::debug;
use validator::Validate;

use crate::content::{
    AnthropicClient, ConfirmationEmail, ConfirmationEmailInput, ContentGenerationError,
    ContentGenerator, SecurityPolicy, SecurityPolicyInput, prompts,
};

#[derive(Debug, Clone)]
pub struct LlmContentGenerator {
    client: AnthropicClient,
}

impl LlmContentGenerator {
    #[must_use]
    pub fn new(client: AnthropicClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn confirmation_email(
        &self,
        input: ConfirmationEmailInput,
    ) -> Result<ConfirmationEmail, ContentGenerationError> {
        let reply = self
            .client
            .complete(
                Some(prompts::CONFIRMATION_EMAIL_SYSTEM),
                &prompts::confirmation_email(&input),
            )
            .await?;

        debug!(hotel = %input.hotel_name, bytes = reply.len(), "confirmation email generated");

        Ok(ConfirmationEmail {
            html_content: prompts::strip_code_fence(&reply).to_string(),
        })
    }

    async fn security_policy(
        &self,
        input: SecurityPolicyInput,
    ) -> Result<SecurityPolicy, ContentGenerationError> {
        input.validate()?;

        let reply = self
            .client
            .complete(
                Some(prompts::SECURITY_POLICY_SYSTEM),
                &prompts::security_policy(&input),
            )
            .await?;

        Ok(SecurityPolicy {
            policy_recommendations: reply.trim().to_string(),
        })
    }
}
