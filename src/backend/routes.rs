// Start of file: /src/backend/routes.rs

use axum::{routing::get, Router};

use crate::backend::{handler, BackendState};

pub const HELLO_PATH: &str = "/api/hello/";

pub fn hello_routes() -> Router<BackendState> {
    Router::new()
        .route(HELLO_PATH, get(handler::hello_handler))
        .fallback(handler::fallback_handler)
}

// End of file: /src/backend/routes.rs
