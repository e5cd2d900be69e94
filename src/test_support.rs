//! In-memory fakes for the gateway's transport and navigation seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::config::ClientConfig;
use crate::net::gateway::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Navigator, Transport, TransportError};
use crate::state::session::SessionStore;
use crate::state::storage::{MemoryStorage, TOKEN_KEY};

type Outcome = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Outcome),
    Deferred(oneshot::Receiver<Outcome>),
}

/// Replays queued outcomes in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    queue: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.push(Scripted::Ready(Ok(HttpResponse::new(status, body.to_string()))));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.push(Scripted::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, err: TransportError) {
        self.push(Scripted::Ready(Err(err)));
    }

    /// Queue a response that is delivered through the returned sender.
    pub fn defer(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted::Deferred(rx));
        tx
    }

    fn push(&self, entry: Scripted) {
        self.queue.lock().unwrap().push_back(entry);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Outcome> {
        self.requests.lock().unwrap().push(request);
        let next = self.queue.lock().unwrap().pop_front();
        Box::pin(async move {
            match next {
                Some(Scripted::Ready(outcome)) => outcome,
                Some(Scripted::Deferred(rx)) => rx.await.unwrap_or_else(|_| Err(TransportError::Network("dropped".to_owned()))),
                None => Err(TransportError::Network("no scripted response".to_owned())),
            }
        })
    }
}

/// Records hard redirects instead of performing them.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

/// A store, client, and fakes wired together.
pub struct Harness {
    pub storage: MemoryStorage,
    pub store: Arc<SessionStore>,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub api: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::default())
    }

    /// Harness whose storage already holds `token`, as after a page reload.
    pub fn with_stored_token(token: &str) -> Self {
        Self::with_storage(MemoryStorage::with_entry(TOKEN_KEY, token))
    }

    fn with_storage(storage: MemoryStorage) -> Self {
        let store = Arc::new(SessionStore::new(storage.clone()));
        let transport = Arc::new(ScriptedTransport::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let api = ApiClient::new(
            ClientConfig { api_base_url: "http://api.test/v1".to_owned(), ..ClientConfig::default() },
            store.clone(),
            transport.clone(),
            navigator.clone(),
        );
        Self { storage, store, transport, navigator, api }
    }
}

pub fn profile_json(id: i64, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("user{id}@example.com"),
        "username": format!("user{id}"),
        "avatar": null,
        "bio": "hello",
        "role": role,
        "is_active": true,
        "is_verified": true,
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-01T00:00:00",
        "nodes_count": 4,
        "likes_count": 9
    })
}
