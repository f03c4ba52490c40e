// Start of file: /src/models/greeting.rs

use serde::{Deserialize, Serialize};

/// Body served by the hello endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingPayload {
    pub message: String,
}

impl GreetingPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

// End of file: /src/models/greeting.rs
