// Start of file: /src/fetcher/mod.rs

pub mod failure;
pub mod greeting;

pub use failure::{FailureReason, FetchFailure, GreetingOutcome};
pub use greeting::{extract_message, GreetingFetcher};

// End of file: /src/fetcher/mod.rs
