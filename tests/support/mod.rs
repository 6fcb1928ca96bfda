//! In-process fake of the job tracker backend.
//!
//! Serves the REST contract the client consumes (auth + jobs groups) on an
//! ephemeral port, with bearer-token enforcement on the jobs group.

use std::{
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Bearer token issued by the fake backend on every successful login.
pub const TOKEN: &str = "test-token";

struct User {
    name: String,
    email: String,
    password: String,
}

#[derive(Default)]
struct BackendState {
    users: Mutex<Vec<User>>,
    jobs: Mutex<Vec<Value>>,
    next_id: AtomicI64,
}

pub struct TestBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
}

impl TestBackend {
    /// Bind an ephemeral port and serve the fake backend on it.
    pub async fn start() -> Self {
        let state = Arc::new(BackendState {
            next_id: AtomicI64::new(1),
            ..BackendState::default()
        });

        let app = Router::new()
            .route("/api/auth/register", post(register))
            .route("/api/auth/login", post(login))
            .route("/api/jobs", get(list_jobs).post(create_job))
            .route("/api/jobs/{id}", put(update_job).delete(delete_job))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("test backend local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test backend");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Create an account directly, bypassing the register endpoint.
    pub fn seed_user(&self, name: &str, email: &str, password: &str) {
        self.state
            .users
            .lock()
            .expect("users lock")
            .push(User {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            });
    }

    /// Number of job records currently held by the backend.
    pub fn job_count(&self) -> usize {
        self.state.jobs.lock().expect("jobs lock").len()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TOKEN}");

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "missing or invalid token" })),
    )
        .into_response()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "job not found" })),
    )
        .into_response()
}

async fn register(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().to_string();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    let mut users = state.users.lock().expect("users lock");

    if users.iter().any(|user| user.email == email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "email already registered" })),
        )
            .into_response();
    }

    users.push(User {
        name: name.clone(),
        email,
        password,
    });

    (StatusCode::CREATED, Json(json!({ "name": name }))).into_response()
}

async fn login(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let users = state.users.lock().expect("users lock");

    match users
        .iter()
        .find(|user| user.email == email && user.password == password)
    {
        Some(user) => Json(json!({ "token": TOKEN, "name": user.name })).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credentials" })),
        )
            .into_response(),
    }
}

async fn list_jobs(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let jobs = state.jobs.lock().expect("jobs lock").clone();

    Json(Value::Array(jobs)).into_response()
}

async fn create_job(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    for field in ["company", "position", "status", "appliedDate"] {
        let present = body
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|value| !value.is_empty());

        if !present {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("{field} is required") })),
            )
                .into_response();
        }
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    body["id"] = json!(id);

    state.jobs.lock().expect("jobs lock").push(body.clone());

    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_job(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut jobs = state.jobs.lock().expect("jobs lock");

    let Some(job) = jobs.iter_mut().find(|job| job["id"] == json!(id)) else {
        return not_found();
    };

    let mut updated = body;
    updated["id"] = json!(id);
    *job = updated.clone();

    Json(updated).into_response()
}

async fn delete_job(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }

    let mut jobs = state.jobs.lock().expect("jobs lock");

    let Some(index) = jobs.iter().position(|job| job["id"] == json!(id)) else {
        return not_found();
    };

    jobs.remove(index);

    StatusCode::NO_CONTENT.into_response()
}
