//! In-process attractions catalog for exercising the HTTP client.
//!
//! Records posted to the create route are stored and returned by later
//! searches. Individual routes can be scripted to answer with a fixed status
//! and raw body instead.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Default)]
pub struct ServerState {
    pub stored: Mutex<Vec<Value>>,
    pub search_bodies: Mutex<Vec<Value>>,
    pub create_bodies: Mutex<Vec<Value>>,
    search_override: Mutex<Option<(u16, String)>>,
    failing_create: Mutex<Option<(String, u16)>>,
}

pub struct CatalogServer {
    pub addr: SocketAddr,
    pub state: Arc<ServerState>,
}

impl CatalogServer {
    pub async fn start() -> Self {
        let state = Arc::new(ServerState::default());
        let app = Router::new()
            .route("/api/attractions/search", post(search))
            .route("/api/attractions", post(create))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test catalog");
        });

        CatalogServer { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer every search with this status and raw body
    pub fn respond_to_search(&self, status: u16, body: &str) {
        *self.state.search_override.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Reject creating the record with this name
    pub fn fail_create(&self, name: &str, status: u16) {
        *self.state.failing_create.lock().unwrap() = Some((name.to_string(), status));
    }

    pub fn search_bodies(&self) -> Vec<Value> {
        self.state.search_bodies.lock().unwrap().clone()
    }

    pub fn create_bodies(&self) -> Vec<Value> {
        self.state.create_bodies.lock().unwrap().clone()
    }
}

fn raw_json(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn search(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    state.search_bodies.lock().unwrap().push(body);

    if let Some((status, body)) = state.search_override.lock().unwrap().clone() {
        return raw_json(status, body);
    }

    let items = state.stored.lock().unwrap().clone();
    Json(json!({ "items": items })).into_response()
}

async fn create(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    state.create_bodies.lock().unwrap().push(body.clone());

    let failing = state.failing_create.lock().unwrap().clone();
    if let Some((name, status)) = failing
        && body["name"] == name.as_str()
    {
        return raw_json(status, json!({ "detail": "rejected" }).to_string());
    }

    let mut stored = state.stored.lock().unwrap();
    let mut record = body;
    record["id"] = json!(stored.len() + 1);
    stored.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}
