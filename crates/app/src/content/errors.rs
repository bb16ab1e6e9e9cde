//! Content generation errors.

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ContentGenerationError {
    #[error("invalid content request")]
    InvalidInput(#[from] ValidationErrors),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    #[error("rate limited by the language model provider")]
    RateLimited,

    #[error("language model provider rejected the API key")]
    Unauthorized,

    #[error("language model provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("language model returned no text")]
    EmptyResponse,
}
