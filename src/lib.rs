// Library root for the greeting fetcher and its companion hello backend

pub mod backend;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod fetcher;
pub mod models;
pub mod page;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use crate::fetcher::{FailureReason, FetchFailure, GreetingFetcher, GreetingOutcome};
pub use crate::page::{Document, InMemoryDocument, PageError};
