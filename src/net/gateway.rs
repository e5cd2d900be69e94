//! Authorized request gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call goes through [`ApiClient`]. It attaches the session's
//! bearer token before dispatch and classifies whatever comes back into
//! [`ApiError`]. Nothing above this module inspects status codes.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any endpoint tears the session down: the store is logged out,
//! the browser is sent to `/login` with a full page load, and the caller gets
//! `ApiError::AuthExpired` instead of the server's message.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Navigator, Transport, TransportError};
use crate::config::ClientConfig;
use crate::routes::RouteName;
use crate::state::session::SessionStore;
use crate::util::query;

const STATUS_UNAUTHORIZED: u16 = 401;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Cloneable handle for making authenticated API calls.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    session: Arc<SessionStore>,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Serialized request body plus its content type.
enum Payload {
    Empty,
    Json(String),
    Form(String),
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionStore>,
        transport: Arc<dyn Transport>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config: Arc::new(config), session, transport, navigator }
    }

    /// The session store whose token this client sends.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failed call.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(Method::Get, path, Payload::Empty).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failed call.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let payload = json_payload(body)?;
        self.send(Method::Post, path, payload).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failed call.
    pub async fn patch_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let payload = json_payload(body)?;
        self.send(Method::Patch, path, payload).await
    }

    /// `POST path` with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any failed call.
    pub async fn post_form<R: DeserializeOwned>(&self, path: &str, fields: &[(&str, &str)]) -> Result<R, ApiError> {
        let payload = Payload::Form(query::encode_pairs(fields.iter().copied()));
        self.send(Method::Post, path, payload).await
    }

    async fn send<R: DeserializeOwned>(&self, method: Method, path: &str, payload: Payload) -> Result<R, ApiError> {
        let request = self.prepare(method, path, payload);
        let outcome = self.transport.send(request).await;
        let response = self.settle(path, outcome)?;
        decode_body(path, &response.body)
    }

    /// Pre-call hook: resolve the URL, attach content type and bearer token.
    fn prepare(&self, method: Method, path: &str, payload: Payload) -> HttpRequest {
        let url = self.config.endpoint(path);
        let mut headers = Vec::new();
        let body = match payload {
            Payload::Empty => None,
            Payload::Json(body) => {
                headers.push(("Content-Type".to_owned(), CONTENT_TYPE_JSON.to_owned()));
                Some(body)
            }
            Payload::Form(body) => {
                headers.push(("Content-Type".to_owned(), CONTENT_TYPE_FORM.to_owned()));
                Some(body)
            }
        };
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        HttpRequest { method, url, headers, body, timeout: self.config.request_timeout }
    }

    /// Post-call hook: pass successes through, classify everything else.
    fn settle(&self, path: &str, outcome: Result<HttpResponse, TransportError>) -> Result<HttpResponse, ApiError> {
        let response = match outcome {
            Ok(response) => response,
            Err(TransportError::Build(reason)) => {
                leptos::logging::warn!("request to {path} not sent: {reason}");
                return Err(ApiError::RequestMalformed);
            }
            Err(TransportError::Network(reason)) => {
                leptos::logging::warn!("request to {path} got no response: {reason}");
                return Err(ApiError::NetworkUnavailable);
            }
        };
        if response.is_success() {
            return Ok(response);
        }
        if response.status == STATUS_UNAUTHORIZED {
            leptos::logging::warn!("credential rejected on {path}; ending session");
            self.session.logout();
            self.navigator.hard_redirect(RouteName::Login.path());
            return Err(ApiError::AuthExpired);
        }
        Err(ApiError::request_failed(error_detail(&response.body)))
    }
}

fn json_payload<B: Serialize>(body: &B) -> Result<Payload, ApiError> {
    serde_json::to_string(body).map(Payload::Json).map_err(|e| {
        leptos::logging::warn!("request body serialization failed: {e}");
        ApiError::RequestMalformed
    })
}

/// The `detail` string of a FastAPI-style error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode_body<R: DeserializeOwned>(path: &str, body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| {
        leptos::logging::warn!("response from {path} could not be decoded: {e}");
        ApiError::request_failed(None)
    })
}
