//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI arguments over `USER_API_*` environment variables. The
//! database URL is the only required value; its absence is a fatal startup
//! error.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::RetryPolicy;

/// Raised when required configuration is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("USER_API_DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

/// Configuration values controlling the service process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_API")]
pub struct ServiceSettings {
    /// PostgreSQL connection string. Required.
    pub database_url: Option<String>,
    /// Interface the HTTP listener binds to.
    #[ortho_config(default = "0.0.0.0".to_string())]
    pub host: String,
    /// Port the HTTP listener binds to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Insert the fixed sample records during schema bootstrap.
    #[ortho_config(default = false)]
    pub seed_sample_data: bool,
    /// Delay in seconds before the first database retry.
    #[ortho_config(default = 2)]
    pub db_wait_initial_delay_secs: u64,
    /// Cap in seconds on the database retry backoff.
    #[ortho_config(default = 30)]
    pub db_wait_max_delay_secs: u64,
    /// Maximum number of database connection attempts at startup.
    #[ortho_config(default = 10)]
    pub db_wait_max_attempts: u32,
}

impl ServiceSettings {
    /// Return the configured database URL or fail when absent.
    pub fn database_url(&self) -> Result<&str, SettingsError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(SettingsError::MissingDatabaseUrl)
    }

    /// Build the startup retry policy from the configured knobs.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_secs(self.db_wait_initial_delay_secs),
            Duration::from_secs(self.db_wait_max_delay_secs),
            self.db_wait_max_attempts,
        )
    }
}
