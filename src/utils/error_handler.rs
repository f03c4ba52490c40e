// Start of file: /src/utils/error_handler.rs

// Maps middleware-layer errors of the hello backend to HTTP responses

use axum::{
    BoxError,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;

pub async fn handle_global_error(err: BoxError) -> (StatusCode, Json<Value>) {
    let status: StatusCode = status_for(&*err);
    tracing::warn!(%status, "Backend layer error: {err}");

    (status, Json(json!({ "error": status.canonical_reason().unwrap_or("Error") })))
}

/// 408 for timeouts anywhere in the chain, 500 otherwise
pub fn status_for(err: &(dyn Error + 'static)) -> StatusCode {
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}


// End of file: /src/utils/error_handler.rs
