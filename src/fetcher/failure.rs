// Start of file: /src/fetcher/failure.rs

/*
    * Every way a greeting fetch can go wrong. The user always sees the same
    * fallback text; the variants exist so callers and tests can tell causes apart.
*/

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::page::PageError;

#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("request to greeting endpoint failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("response body is not a usable greeting: {0}")]
    Parse(String),

    #[error("response body has no 'message' field")]
    MissingField,

    #[error("display target unavailable: {0}")]
    DomTarget(#[from] PageError),
}

/// Tag for a [`FetchFailure`], without the underlying error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    Network,
    Parse,
    MissingField,
    DomTarget,
}

impl FetchFailure {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Network(_) => FailureReason::Network,
            Self::Parse(_) => FailureReason::Parse,
            Self::MissingField => FailureReason::MissingField,
            Self::DomTarget(_) => FailureReason::DomTarget,
        }
    }
}

impl From<serde_json::Error> for FetchFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag: &str = match self {
            Self::Network => "network",
            Self::Parse => "parse",
            Self::MissingField => "missing_field",
            Self::DomTarget => "dom_target",
        };
        f.write_str(tag)
    }
}

/// Result of one fetch-and-render pass.
#[derive(Debug)]
pub enum GreetingOutcome {
    Success(String),
    Failure(FetchFailure),
}

impl GreetingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            Self::Failure(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.reason()),
        }
    }
}

// End of file: /src/fetcher/failure.rs
