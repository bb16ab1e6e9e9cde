//! Auth Config

use clap::Args;

/// Login and access token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Agency login email; agency login is disabled when unset
    #[arg(long, env = "AGENCY_EMAIL")]
    pub agency_email: Option<String>,

    /// Agency password verifier, as printed by `innkeep-app password hash`
    #[arg(long, env = "AGENCY_PASSWORD_HASH", hide_env_values = true)]
    pub agency_password_hash: Option<String>,

    /// Access token lifetime in hours
    #[arg(long, env = "ACCESS_TOKEN_TTL_HOURS", default_value_t = 12_i64)]
    pub access_token_ttl_hours: i64,
}
