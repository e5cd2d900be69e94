//! Classified failures surfaced by the API gateway and session store.
//!
//! ERROR HANDLING
//! ==============
//! The gateway is the only place that looks at HTTP status codes or
//! transport failures. Everything above it matches on these variants, and
//! their `Display` output is the message shown to the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub(crate) const AUTH_EXPIRED_MESSAGE: &str = "Session expired, please log in again";
pub(crate) const REQUEST_FAILED_MESSAGE: &str = "Request failed, please try again later";
pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error, please check your connection";
pub(crate) const REQUEST_MALFORMED_MESSAGE: &str = "Request configuration error";

/// Outcome of a failed API call after gateway classification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the bearer credential (HTTP 401).
    #[error("{}", AUTH_EXPIRED_MESSAGE)]
    AuthExpired,
    /// Any other non-2xx response.
    #[error("{0}")]
    RequestFailed(String),
    /// No response was received.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    NetworkUnavailable,
    /// The request could not be built or dispatched.
    #[error("{}", REQUEST_MALFORMED_MESSAGE)]
    RequestMalformed,
}

impl ApiError {
    /// `RequestFailed` carrying the server's message, or the generic fallback.
    #[must_use]
    pub fn request_failed(detail: Option<String>) -> Self {
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_owned());
        Self::RequestFailed(message)
    }
}

/// Failures of session-level operations (`login`, `fetch_user`, `initialize`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The profile for a freshly obtained or rehydrated token could not be loaded.
    #[error("{0}")]
    ProfileFetchFailed(#[source] ApiError),
}

impl SessionError {
    /// The classified gateway error underneath this failure.
    #[must_use]
    pub fn api_error(&self) -> &ApiError {
        match self {
            Self::Api(err) | Self::ProfileFetchFailed(err) => err,
        }
    }
}
