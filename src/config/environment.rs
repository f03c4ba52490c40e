// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern.
// * Covers both the fetcher (endpoint, target, fallback) and the hello backend.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/hello/";
pub const DEFAULT_TARGET_ID: &str = "message";
pub const DEFAULT_FALLBACK_TEXT: &str = "Error connecting to backend";
pub const DEFAULT_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_BACKEND_PORT: u16 = 8000;
pub const DEFAULT_BACKEND_MESSAGE: &str = "Hello from the backend!";
const DEFAULT_BACKEND_TIMEOUT: u64 = 5; // 5 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub endpoint: Cow<'static, str>,
    pub target_id: Cow<'static, str>,
    pub fallback_text: Cow<'static, str>,
    pub backend_host: Cow<'static, str>,
    pub backend_port: u16,
    pub backend_message: Cow<'static, str>,
    pub backend_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            endpoint: Cow::Borrowed(DEFAULT_ENDPOINT),
            target_id: Cow::Borrowed(DEFAULT_TARGET_ID),
            fallback_text: Cow::Borrowed(DEFAULT_FALLBACK_TEXT),
            backend_host: Cow::Borrowed(DEFAULT_BACKEND_HOST),
            backend_port: DEFAULT_BACKEND_PORT,
            backend_message: Cow::Borrowed(DEFAULT_BACKEND_MESSAGE),
            backend_timeout_seconds: DEFAULT_BACKEND_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_map(&vars)
    }

    // * Builds the configuration from an explicit key/value map, providing defaults if missing
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);
        let owned = |s: &str| -> Cow<'static, str> { Cow::Owned(s.to_string()) };

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(owned)
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            endpoint: get_var("GREETING_ENDPOINT")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_ENDPOINT)),

            target_id: get_var("GREETING_TARGET_ID")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_TARGET_ID)),

            fallback_text: get_var("GREETING_FALLBACK_TEXT")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_FALLBACK_TEXT)),

            backend_host: get_var("BACKEND_HOST")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_BACKEND_HOST)),

            backend_port: get_var("BACKEND_PORT")
                .map(|s| s.parse().context("Invalid BACKEND_PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_BACKEND_PORT),

            backend_message: get_var("BACKEND_MESSAGE")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_BACKEND_MESSAGE)),

            backend_timeout_seconds: get_var("BACKEND_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid BACKEND_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_BACKEND_TIMEOUT),
        })
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        // ! Panics if loading fails
        INSTANCE.as_ref().expect("Failed to load environment configuration")
    }
}


// End of file: /src/config/environment.rs
