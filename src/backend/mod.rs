// Start of file: /src/backend/mod.rs

/*
    * Companion development backend that serves the hello endpoint
    * the fetcher talks to.
*/

pub mod handler;
pub mod routes;

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct BackendState {
    pub message: Arc<str>,
}

impl BackendState {
    pub fn new(message: impl AsRef<str>) -> Self {
        Self { message: Arc::from(message.as_ref()) }
    }

    pub fn from_env(env: &EnvironmentVariables) -> Self {
        Self::new(env.backend_message.to_string())
    }
}

// End of file: /src/backend/mod.rs
