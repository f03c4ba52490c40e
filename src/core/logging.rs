// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

// Used when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "greeting_fetcher=info,hello_backend=info";

// Initialize the tracing subscriber with default configuration.
// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}


// End of file: /src/core/logging.rs
