// Start of file: /src/backend/handler.rs

/*
    * Handlers for the hello backend. The greeting body is the bare
    * `{"message": ...}` object the fetcher reads, with no envelope.
*/

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::backend::BackendState;
use crate::models::GreetingPayload;

#[instrument(skip(state))]
pub async fn hello_handler(State(state): State<BackendState>) -> Json<GreetingPayload> {
    info!("Hello endpoint called");

    Json(GreetingPayload::new(state.message.to_string()))
}

pub async fn fallback_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested route does not exist" })),
    )
}

// End of file: /src/backend/handler.rs
