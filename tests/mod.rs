//! tests/mod.rs
//! Shared test helpers: mock hello endpoints on ephemeral ports.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::get,
    serve, Router,
};
use tokio::net::TcpListener as TokioTcpListener;

use greeting_fetcher::core::server::create_app;
use greeting_fetcher::EnvironmentVariables;

pub const HELLO_PATH: &str = "/api/hello/";

/// A running mock endpoint and the number of requests it has served.
pub struct MockEndpoint {
    pub url: String,
    pub hits: Arc<AtomicUsize>,
}

impl MockEndpoint {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    hits: Arc<AtomicUsize>,
}

async fn mock_handler(State(state): State<MockState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, [(CONTENT_TYPE, "application/json")], state.body)
}

/// Spawns `app` on a random unused port and returns its base URL.
pub fn spawn_server(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Serves `body` with `status` at the hello path and counts requests.
pub fn spawn_mock(status: StatusCode, body: &'static str) -> MockEndpoint {
    let hits: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let state: MockState = MockState { status, body, hits: hits.clone() };

    let app: Router = Router::new()
        .route(HELLO_PATH, get(mock_handler))
        .with_state(state);

    let base_url: String = spawn_server(app);

    MockEndpoint { url: format!("{}{}", base_url, HELLO_PATH), hits }
}

/// Spawns the real hello backend with default configuration.
pub fn spawn_backend() -> String {
    let env: EnvironmentVariables = EnvironmentVariables::default();
    spawn_server(create_app(&env))
}

/// A URL on a port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}{}", addr, HELLO_PATH)
}
