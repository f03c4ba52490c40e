// Start of file: /src/diagnostics/mod.rs

/*
    * Developer-facing diagnostic channel. Failures are recorded here and
    * never shown to the end user beyond the fallback text.
*/

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::fetcher::{FailureReason, FetchFailure};

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, failure: &FetchFailure);
}

/// Writes failures to the tracing subscriber at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, failure: &FetchFailure) {
        error!(reason = %failure.reason(), error = ?failure, "Greeting fetch failed");
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEntry {
    pub recorded_at: DateTime<Utc>,
    pub reason: FailureReason,
    pub detail: String,
}

/// Keeps every recorded failure in memory. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<DiagnosticEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, failure: &FetchFailure) {
        let entry: DiagnosticEntry = DiagnosticEntry {
            recorded_at: Utc::now(),
            reason: failure.reason(),
            detail: failure.to_string(),
        };
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).push(entry);
    }
}


// End of file: /src/diagnostics/mod.rs
