//! Content Generation Config

use clap::Args;
use innkeep_app::content::{DEFAULT_ANTHROPIC_API_URL, DEFAULT_ANTHROPIC_MODEL};

/// Text generation settings.
#[derive(Debug, Args)]
pub struct ContentConfig {
    /// Anthropic API key; templates are used when unset
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// Anthropic API base URL
    #[arg(long, env = "ANTHROPIC_API_URL", default_value = DEFAULT_ANTHROPIC_API_URL)]
    pub anthropic_api_url: String,

    /// Model used for generation
    #[arg(long, env = "ANTHROPIC_MODEL", default_value = DEFAULT_ANTHROPIC_MODEL)]
    pub anthropic_model: String,

    /// Maximum tokens per generated reply
    #[arg(long, env = "ANTHROPIC_MAX_TOKENS", default_value_t = 4_096_u32)]
    pub anthropic_max_tokens: u32,
}
