//! tests/greeting/single_request.rs
//! One render issues exactly one request, whatever the outcome.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

use greeting_fetcher::{GreetingFetcher, InMemoryDocument, MemorySink};

#[tokio::test]
async fn success_issues_one_request() {
    let mock: common::MockEndpoint = common::spawn_mock(StatusCode::OK, r#"{"message": "Hello"}"#);
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");

    GreetingFetcher::new(&mock.url)
        .render(&document, &MemorySink::new())
        .await;

    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn failure_is_never_retried() {
    let mock: common::MockEndpoint =
        common::spawn_mock(StatusCode::SERVICE_UNAVAILABLE, "service unavailable");
    let document: InMemoryDocument = InMemoryDocument::new().with_element("message");
    let sink: MemorySink = MemorySink::new();

    let outcome = GreetingFetcher::new(&mock.url).render(&document, &sink).await;

    assert!(!outcome.is_success());
    assert_eq!(mock.hits(), 1);
    assert_eq!(sink.len(), 1);
}
