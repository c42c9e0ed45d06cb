//! Client configuration.
//!
//! Native builds talk to an explicit server URL taken from the environment.
//! Browser builds post to the page's own origin, so the base URL stays empty
//! and request paths are resolved relative to it.

use std::time::Duration;

/// Default board server (the Flask development server)
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const SERVER_URL_VAR: &str = "INTERNHUB_SERVER_URL";
pub const TIMEOUT_VAR: &str = "INTERNHUB_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash; empty means same origin
    pub server_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Post relative to the page that served the client
    pub fn same_origin() -> Self {
        Self {
            server_url: String::new(),
            ..Self::default()
        }
    }

    /// Read `INTERNHUB_SERVER_URL` and `INTERNHUB_HTTP_TIMEOUT_SECS`,
    /// falling back to defaults if not set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_url = lookup(SERVER_URL_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .and_then(|raw| match url::Url::parse(&raw) {
                Ok(_) => Some(raw.trim_end_matches('/').to_string()),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Invalid {}, using default", SERVER_URL_VAR);
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let timeout_secs = lookup(TIMEOUT_VAR)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid {}, using default", TIMEOUT_VAR);
                    None
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            server_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Full URL for a request path such as `/add_internship`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}
