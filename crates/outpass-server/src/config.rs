//! Server configuration from environment variables.

use std::env;
use std::time::Duration;

use outpass_db::DbConfig;

/// Configuration for the HTTP server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    pub db: DbConfig,
    /// Upper bound on a single notification delivery attempt.
    pub notify_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".into(),
            db: DbConfig::default(),
            notify_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from `OUTPASS_*` environment variables,
    /// falling back to the defaults for any that are unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let notify_timeout = env::var("OUTPASS_NOTIFY_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.notify_timeout);

        Self {
            listen_addr: env::var("OUTPASS_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            db: DbConfig::from_env(),
            notify_timeout,
        }
    }
}
