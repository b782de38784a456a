//! In-process REST collection for exercising the store over real HTTP.
//!
//! Behaves like a json-server collection at `/{resource}`: GET lists, POST
//! assigns an id, PUT/DELETE address `/{resource}/{id}` and 404 on unknown
//! ids. Queued overrides replace the next responses regardless of route.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

/// A canned response that bypasses the collection.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "status {}"}}"#, status).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            body: value.to_string().into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    resource: String,
    items: Arc<Mutex<Vec<Value>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    overrides: Arc<Mutex<VecDeque<MockResponse>>>,
    next_id: Arc<AtomicU64>,
}

/// Mock listing collection server.
pub struct MockResource {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockResource {
    /// Start serving `/{resource}` on an ephemeral port.
    pub async fn start(resource: &str) -> Self {
        let state = MockState {
            resource: resource.to_string(),
            items: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            overrides: Arc::new(Mutex::new(VecDeque::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Put a record straight into the collection, bypassing HTTP.
    pub async fn seed(&self, record: Value) {
        self.state.items.lock().await.push(record);
    }

    /// Snapshot of the server-side collection.
    pub async fn items(&self) -> Vec<Value> {
        self.state.items.lock().await.clone()
    }

    /// The next request gets `resp` instead of the collection's answer.
    pub async fn enqueue_override(&self, resp: MockResponse) {
        self.state.overrides.lock().await.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn clear_requests(&self) {
        self.state.requests.lock().await.clear();
    }
}

impl Drop for MockResource {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().await.push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        body: body.clone(),
    });

    let override_resp = state.overrides.lock().await.pop_front();
    if let Some(resp) = override_resp {
        if resp.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
        }
        return respond_bytes(resp.status, resp.body);
    }

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", [resource]) if *resource == state.resource => {
            let items = state.items.lock().await.clone();
            respond(200, Value::Array(items))
        }
        ("POST", [resource]) if *resource == state.resource => {
            let Ok(Value::Object(mut record)) = serde_json::from_slice::<Value>(&body) else {
                return respond(400, json!({"error": "expected object"}));
            };
            let id = state.next_id.fetch_add(1, Ordering::SeqCst).to_string();
            record.insert("id".to_string(), Value::String(id));
            let record = Value::Object(record);
            state.items.lock().await.push(record.clone());
            respond(201, record)
        }
        ("PUT", [resource, id]) if *resource == state.resource => {
            let Ok(Value::Object(mut record)) = serde_json::from_slice::<Value>(&body) else {
                return respond(400, json!({"error": "expected object"}));
            };
            let mut items = state.items.lock().await;
            let Some(slot) = items.iter_mut().find(|r| id_text(r) == *id) else {
                return respond(404, json!({}));
            };
            // Keep the stored id shape, like json-server does.
            record.insert("id".to_string(), slot["id"].clone());
            *slot = Value::Object(record);
            respond(200, slot.clone())
        }
        ("DELETE", [resource, id]) if *resource == state.resource => {
            let mut items = state.items.lock().await;
            let before = items.len();
            items.retain(|r| id_text(r) != *id);
            if items.len() == before {
                respond(404, json!({}))
            } else {
                respond(200, json!({}))
            }
        }
        _ => respond(404, json!({"error": "no route"})),
    }
}

fn id_text(record: &Value) -> String {
    match &record["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn respond(status: u16, body: Value) -> Response<Body> {
    respond_bytes(status, body.to_string().into_bytes())
}

fn respond_bytes(status: u16, body: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
