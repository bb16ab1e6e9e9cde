//! Storage Config

use clap::{Args, ValueEnum};

/// Document store backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// Process-local store; data is lost on restart.
    Memory,

    /// `PostgreSQL` JSONB document table.
    Postgres,
}

/// Document store settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Document store backend (memory, postgres)
    #[arg(long, env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Postgres)]
    pub store: StoreBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Apply pending migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}
