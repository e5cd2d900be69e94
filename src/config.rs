//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in at build time from `STORYFORK_API_BASE_URL` and falls back to
//! the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// API base URL used when no build-time override is present.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8057/api/v1";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every outbound API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build the configuration from compile-time environment overrides.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("STORYFORK_API_BASE_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self { api_base_url: url.to_owned(), ..Self::default() },
            None => Self::default(),
        }
    }

    /// Join the base URL and an endpoint path with exactly one `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
