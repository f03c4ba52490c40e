//! tests/greeting/success.rs
//! Successful fetches write the message into the display target.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;

use reqwest::StatusCode;

use greeting_fetcher::{
    DiagnosticSink, Document, GreetingFetcher, GreetingOutcome, InMemoryDocument, MemorySink,
};

#[tokio::test]
async fn renders_message_from_endpoint() {
    let mock: common::MockEndpoint = common::spawn_mock(StatusCode::OK, r#"{"message": "Hello"}"#);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");
    let sink: MemorySink = MemorySink::new();

    let outcome: GreetingOutcome = GreetingFetcher::new(&mock.url).render(&document, &sink).await;

    assert_eq!(outcome.message(), Some("Hello"));
    assert_eq!(document.text_content("message").as_deref(), Some("Hello"));
    assert!(sink.is_empty());
}

#[tokio::test]
async fn non_success_status_with_json_body_still_renders() {
    let mock: common::MockEndpoint =
        common::spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message": "Degraded"}"#);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");
    let sink: MemorySink = MemorySink::new();

    let outcome: GreetingOutcome = GreetingFetcher::new(&mock.url).render(&document, &sink).await;

    assert!(outcome.is_success());
    assert_eq!(document.text_content("message").as_deref(), Some("Degraded"));
}

#[tokio::test]
async fn repeated_renders_do_not_accumulate_text() {
    let mock: common::MockEndpoint = common::spawn_mock(StatusCode::OK, r#"{"message": "Hello"}"#);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");
    let sink: MemorySink = MemorySink::new();
    let fetcher: GreetingFetcher = GreetingFetcher::new(&mock.url);

    for _ in 0..3 {
        fetcher.render(&document, &sink).await;
        assert_eq!(document.text_content("message").as_deref(), Some("Hello"));
    }

    assert_eq!(mock.hits(), 3);
}

#[tokio::test]
async fn spawned_fetch_writes_into_custom_target() {
    let mock: common::MockEndpoint = common::spawn_mock(StatusCode::OK, r#"{"message": "Hi there"}"#);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("greeting");

    let handle = GreetingFetcher::new(&mock.url)
        .target_id("greeting")
        .spawn(
            Arc::new(document.clone()) as Arc<dyn Document>,
            Arc::new(MemorySink::new()) as Arc<dyn DiagnosticSink>,
        );
    let outcome: GreetingOutcome = handle.await.expect("fetch task panicked");

    assert!(outcome.is_success());
    assert_eq!(document.text_content("greeting").as_deref(), Some("Hi there"));
}

#[tokio::test]
async fn renders_greeting_from_hello_backend() {
    let base_url: String = common::spawn_backend();
    let endpoint: String = format!("{}{}", base_url, common::HELLO_PATH);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");
    let sink: MemorySink = MemorySink::new();

    let outcome: GreetingOutcome = GreetingFetcher::new(endpoint).render(&document, &sink).await;

    assert_eq!(outcome.message(), Some("Hello from the backend!"));
    assert_eq!(
        document.text_content("message").as_deref(),
        Some("Hello from the backend!")
    );
}
