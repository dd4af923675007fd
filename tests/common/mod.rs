//! Local axum server standing in for the DeepL service.
//!
//! Canned responses are served in order, one per request, whatever the path.
//! Every request is recorded with its form fields for inspection.

#![allow(dead_code, clippy::unwrap_used)]

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Router};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::mpsc;

pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, body)
    }
}

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub form: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.form
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

struct StubState {
    responses: Mutex<VecDeque<CannedResponse>>,
    recorded: mpsc::UnboundedSender<RecordedRequest>,
}

async fn respond(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    Form(form): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let _ = state.recorded.send(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        form,
    });

    let canned = state.responses.lock().unwrap().pop_front();
    let (status, body) = canned.map_or(
        (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
        |canned| (StatusCode::from_u16(canned.status).unwrap(), canned.body),
    );

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

pub struct StubServer {
    pub base_url: String,
    requests: Mutex<mpsc::UnboundedReceiver<RecordedRequest>>,
}

impl StubServer {
    /// Starts the server on its own runtime thread, so it serves both
    /// `#[tokio::test]` clients and spawned CLI processes.
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        let (recorded_tx, recorded_rx) = mpsc::unbounded_channel();
        let state = Arc::new(StubState {
            responses: Mutex::new(responses.into()),
            recorded: recorded_tx,
        });

        let app = Router::new()
            .route("/v2/usage", post(respond))
            .route("/v2/languages", post(respond))
            .route("/v2/translate", post(respond))
            .with_state(state);

        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });
        let addr = addr_rx.recv().unwrap();

        Self {
            base_url: format!("http://{addr}/v2"),
            requests: Mutex::new(recorded_rx),
        }
    }

    /// Next recorded request. A request is recorded before it is answered,
    /// so anything the client has a response for is already here.
    pub fn next_request(&self) -> RecordedRequest {
        self.requests.lock().unwrap().try_recv().unwrap()
    }
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2")
}
