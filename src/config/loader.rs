//! Configuration loading from the environment.

use std::env;

use crate::config::schema::{CorsPolicy, ResponderConfig};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the CORS policy.
pub const CORS_POLICY_ENV: &str = "CORS_POLICY";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {PORT_ENV} value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid {CORS_POLICY_ENV} value: {0}")]
    InvalidCorsPolicy(String),
}

/// Load configuration from the process environment.
///
/// Unset variables fall back to defaults; set-but-invalid values are a startup
/// error rather than a silent fallback.
pub fn load_config() -> Result<ResponderConfig, ConfigError> {
    load_from(|key| env::var(key).ok())
}

/// Load configuration from an arbitrary variable lookup.
///
/// Separated from [`load_config`] so tests can exercise parsing without
/// mutating process-wide environment state.
pub fn load_from<F>(lookup: F) -> Result<ResponderConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ResponderConfig::default();

    if let Some(raw) = lookup(PORT_ENV) {
        config.listener.port = raw.parse().map_err(|source| ConfigError::InvalidPort {
            value: raw.clone(),
            source,
        })?;
    }

    if let Some(raw) = lookup(CORS_POLICY_ENV) {
        config.cors_policy = raw
            .parse::<CorsPolicy>()
            .map_err(ConfigError::InvalidCorsPolicy)?;
    }

    Ok(config)
}
