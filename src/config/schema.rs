//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config can be captured in test fixtures
//! or dumped for debugging, even though the runtime source is the environment.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Root configuration for the mock responder.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ResponderConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Which CORS policy this instance runs.
    pub cors_policy: CorsPolicy,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on. Taken from the `PORT` environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// Bind address string, always all interfaces.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 9999 }
    }
}

/// CORS behavior of the fixture.
///
/// The two policies are mutually exclusive for a given instance: external test
/// suites assert on literal header values, so the behaviors are never merged.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CorsPolicy {
    /// Emit a fixed wildcard CORS header set plus marker headers on every
    /// response, regardless of whether the request carries `Origin`.
    /// OPTIONS gets no dedicated handling (200 with JSON body).
    #[default]
    Static,

    /// Emit CORS headers only when the request carries `Origin`, echoing that
    /// origin back verbatim. OPTIONS preflight reflects the requested
    /// method/headers and returns 204 with an empty body.
    Reflective,
}

impl FromStr for CorsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(CorsPolicy::Static),
            "reflective" => Ok(CorsPolicy::Reflective),
            other => Err(format!(
                "unknown CORS policy '{other}' (expected 'static' or 'reflective')"
            )),
        }
    }
}

impl std::fmt::Display for CorsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsPolicy::Static => write!(f, "static"),
            CorsPolicy::Reflective => write!(f, "reflective"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResponderConfig::default();
        assert_eq!(config.listener.port, 9999);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:9999");
        assert_eq!(config.cors_policy, CorsPolicy::Static);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_cors_policy_from_str() {
        assert_eq!("static".parse::<CorsPolicy>(), Ok(CorsPolicy::Static));
        assert_eq!(
            "REFLECTIVE".parse::<CorsPolicy>(),
            Ok(CorsPolicy::Reflective)
        );
        assert!("both".parse::<CorsPolicy>().is_err());
    }
}
