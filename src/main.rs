// Start of file: src/main.rs

// Fetches the greeting once and prints what the display target ends up showing.

use std::sync::Arc;

use greeting_fetcher::core::logging::init_tracing;
use greeting_fetcher::{
    DiagnosticSink, Document, EnvironmentVariables, GreetingFetcher, GreetingOutcome,
    InMemoryDocument, TracingSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let env: EnvironmentVariables = EnvironmentVariables::load()?;
    let document: InMemoryDocument = InMemoryDocument::new().with_element(env.target_id.to_string());
    let fetcher: GreetingFetcher = GreetingFetcher::from_env(&env);

    tracing::info!(endpoint = %fetcher.endpoint(), "Fetching greeting");

    let doc_handle: Arc<dyn Document> = Arc::new(document.clone());
    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);
    let outcome: GreetingOutcome = fetcher.spawn(doc_handle, sink).await?;

    tracing::debug!(success = outcome.is_success(), "Greeting fetch finished");

    println!("{}", document.text_content(&env.target_id).unwrap_or_default());

    Ok(())
}

// End of file: src/main.rs
