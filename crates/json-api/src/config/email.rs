//! Email Config

use clap::Args;

/// Outbound email settings.
#[derive(Debug, Args)]
pub struct EmailConfig {
    /// SMTP relay host; emails are only logged when unset
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port
    #[arg(long, env = "SMTP_PORT", default_value_t = 587_u16)]
    pub smtp_port: u16,

    /// SMTP username
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Sender address
    #[arg(long, env = "EMAIL_FROM", default_value = "bookings@innkeep.local")]
    pub email_from: String,

    /// Sender display name
    #[arg(long, env = "EMAIL_FROM_NAME", default_value = "Innkeep")]
    pub email_from_name: String,
}
