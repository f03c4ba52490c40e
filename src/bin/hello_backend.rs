// Start of file: src/bin/hello_backend.rs

// Serves GET /api/hello/ for local development of the greeting fetcher.

use axum::{serve, Router};
use tokio::net::TcpListener;

use greeting_fetcher::core::logging::init_tracing;
use greeting_fetcher::core::server::{create_app, setup_listener, shutdown_signal};
use greeting_fetcher::EnvironmentVariables;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let env: &'static EnvironmentVariables = EnvironmentVariables::instance();
    let app: Router = create_app(env);
    let listener: TcpListener = setup_listener(env).await?;

    tracing::info!("Hello backend listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/bin/hello_backend.rs
