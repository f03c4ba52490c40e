// Start of file: /src/fetcher/greeting.rs

/*
    * The greeting fetcher: one GET to the hello endpoint, one write to the
    * display target. Any failure collapses to the fallback text and a
    * diagnostic record.
    *
    * No status check, no timeout, no retry: whatever body comes back is parsed.
*/

use std::sync::Arc;

use reqwest::{Client, Response};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::config::environment::{
    EnvironmentVariables, DEFAULT_FALLBACK_TEXT, DEFAULT_TARGET_ID,
};
use crate::diagnostics::DiagnosticSink;
use crate::fetcher::failure::{FetchFailure, GreetingOutcome};
use crate::page::Document;

#[derive(Debug, Clone)]
pub struct GreetingFetcher {
    client: Client,
    endpoint: String,
    target_id: String,
    fallback_text: String,
}

impl GreetingFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            target_id: DEFAULT_TARGET_ID.to_string(),
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }

    pub fn from_env(env: &EnvironmentVariables) -> Self {
        Self::new(env.endpoint.to_string())
            .target_id(env.target_id.to_string())
            .fallback_text(env.fallback_text.to_string())
    }

    pub fn target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = id.into();
        self
    }

    pub fn fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = text.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues exactly one GET and extracts the `message` field from the body.
    pub async fn fetch_message(&self) -> Result<String, FetchFailure> {
        let response: Response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchFailure::Network)?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            debug!(%status, "Non-success status from greeting endpoint, parsing body anyway");
        }

        let body: String = response.text().await.map_err(FetchFailure::Network)?;
        extract_message(&body)
    }

    /// Fetches the greeting and writes it into the display target.
    ///
    /// On failure the fallback text replaces whatever the target held and the
    /// underlying error goes to `sink`. Never panics, never rethrows.
    #[instrument(skip_all, fields(endpoint = %self.endpoint, element = %self.target_id))]
    pub async fn render(&self, document: &dyn Document, sink: &dyn DiagnosticSink) -> GreetingOutcome {
        let result: Result<String, FetchFailure> = match self.fetch_message().await {
            Ok(message) => document
                .set_text_content(&self.target_id, &message)
                .map(|()| message)
                .map_err(FetchFailure::from),
            Err(failure) => Err(failure),
        };

        match result {
            Ok(message) => {
                info!("Rendered greeting");
                GreetingOutcome::Success(message)
            }
            Err(failure) => {
                if let Err(e) = document.set_text_content(&self.target_id, &self.fallback_text) {
                    warn!(error = %e, "Could not write fallback text");
                }
                sink.record(&failure);
                GreetingOutcome::Failure(failure)
            }
        }
    }

    /// Starts the fetch in the background and returns immediately.
    ///
    /// This is the initialisation entry point: call it once per page load.
    pub fn spawn(
        self,
        document: Arc<dyn Document>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> JoinHandle<GreetingOutcome> {
        tokio::spawn(async move { self.render(&*document, &*sink).await })
    }
}

/// Pulls the displayable text out of a greeting body.
///
/// A missing field is [`FetchFailure::MissingField`]; any present value is
/// rendered with [`display_text`].
pub fn extract_message(body: &str) -> Result<String, FetchFailure> {
    let payload: Value = serde_json::from_str(body)?;

    payload
        .get("message")
        .map(display_text)
        .ok_or(FetchFailure::MissingField)
}

/// Text a page element shows when its content is set to `value`.
///
/// Strings as-is, `null` as empty text, integral numbers without a fraction,
/// arrays joined with commas, objects as `[object Object]`. Exponent notation
/// for very large or very small numbers is not reproduced.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => int.to_string(),
            (_, Some(uint), _) => uint.to_string(),
            // * f64's Display drops a zero fraction: 1.0 -> "1"
            (_, _, Some(float)) => float.to_string(),
            _ => number.to_string(),
        },
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<String>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}


// End of file: /src/fetcher/greeting.rs
