//! Minimal Anthropic Messages API client.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::content::ContentGenerationError;

/// Public Anthropic API base URL.
pub const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1";

/// Model used when none is configured.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,

    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },

    #[serde(other)]
    Other,
}

/// Anthropic API client
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: Zeroizing<String>,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl AnthropicClient {
    /// Create a client for `api_url` (without trailing slash).
    #[must_use]
    pub fn new(api_key: String, api_url: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key: Zeroizing::new(api_key),
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
            max_tokens,
        }
    }

    /// Send a single user turn and return the concatenated text reply.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, non-success statuses, unparsable
    /// bodies, or replies without any text block.
    pub async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, ContentGenerationError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.api_url))
            .header("x-api-key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ContentGenerationError::RequestFailed(e.to_string()))?;

        let body = match response.status() {
            StatusCode::OK => response
                .json::<MessagesResponse>()
                .await
                .map_err(|e| ContentGenerationError::ResponseParseFailed(e.to_string()))?,
            StatusCode::TOO_MANY_REQUESTS => return Err(ContentGenerationError::RateLimited),
            StatusCode::UNAUTHORIZED => return Err(ContentGenerationError::Unauthorized),
            status => {
                let message = response.text().await.unwrap_or_default();

                return Err(ContentGenerationError::ApiError {
                    status: status.as_u16(),
                    message,
                });
            }
        };

        let text: String = body
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect();

        if text.trim().is_empty() {
            return Err(ContentGenerationError::EmptyResponse);
        }

        Ok(text)
    }
}
