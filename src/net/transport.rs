//! Raw HTTP transport and hard navigation seams used by the gateway.
//!
//! Client-side (hydrate): `fetch` via `gloo-net` and `window.location`.
//! Server-side (SSR) and native tests: the browser implementations report
//! no connectivity and skip navigation; tests inject their own fakes.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// HTTP method subset used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// Fully prepared outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a received response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any response was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("no response: {0}")]
    Network(String),
}

/// Sends prepared requests. Futures are `!Send` to match the browser event loop.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;
}

/// Full-page navigation that discards all in-memory client state.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Browser `fetch` transport with an abort-signal timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        #[cfg(feature = "hydrate")]
        {
            Box::pin(fetch(request))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Box::pin(async { Err(TransportError::Network("not available on server".to_owned())) })
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<Method> for gloo_net::http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Patch => Self::PATCH,
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let controller = web_sys::AbortController::new()
        .map_err(|_| TransportError::Build("abort controller unavailable".to_owned()))?;
    let signal = controller.signal();
    let millis = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
    // Dropping the timeout at the end of this function cancels it.
    let _timeout = gloo_timers::callback::Timeout::new(millis, move || controller.abort());

    let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
        .method(request.method.into())
        .abort_signal(Some(&signal));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Build(e.to_string()))?;

    let resp = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    leptos::logging::warn!("hard redirect to {path} failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
