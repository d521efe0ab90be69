//! Integration tests for NewsletterService against mock repositories.

mod mocks;

use kaskady_server::metrics::Metrics;
use kaskady_server::models::NewsletterRequest;
use kaskady_server::services::{NewsletterService, NewsletterServiceImpl, SubscribeOutcome};
use mocks::{MockSubscriberRepository, RecordingNotifier};
use std::sync::Arc;

fn setup() -> (
    NewsletterServiceImpl,
    MockSubscriberRepository,
    RecordingNotifier,
    Metrics,
) {
    let repo = MockSubscriberRepository::new();
    let notifier = RecordingNotifier::new();
    let metrics = Metrics::new();
    let service = NewsletterServiceImpl::new(
        Arc::new(repo.clone()),
        Arc::new(notifier.clone()),
        metrics.clone(),
    );
    (service, repo, notifier, metrics)
}

fn request(email: &str) -> NewsletterRequest {
    NewsletterRequest {
        email: Some(email.to_string()),
    }
}

#[tokio::test]
async fn test_subscribe_new_email() {
    let (service, repo, notifier, metrics) = setup();

    let outcome = service.subscribe(request("eva@example.sk")).await.unwrap();

    assert_eq!(outcome, SubscribeOutcome::Subscribed);
    assert_eq!(repo.subscribers(), vec!["eva@example.sk".to_string()]);
    assert_eq!(metrics.subscribers_added_total(), 1);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Welcome to Kaskady");
}

#[tokio::test]
async fn test_subscribe_twice_keeps_one_entry() {
    let (service, repo, notifier, _) = setup();

    service.subscribe(request("eva@example.sk")).await.unwrap();
    let second = service.subscribe(request("eva@example.sk")).await.unwrap();

    assert_eq!(second, SubscribeOutcome::AlreadySubscribed);
    assert_eq!(repo.subscribers().len(), 1);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_subscribe_trims_email() {
    let (service, repo, _, _) = setup();

    service.subscribe(request("  eva@example.sk ")).await.unwrap();
    service.subscribe(request("eva@example.sk")).await.unwrap();

    assert_eq!(repo.subscribers(), vec!["eva@example.sk".to_string()]);
}

#[tokio::test]
async fn test_subscribe_requires_email() {
    let (service, repo, _, _) = setup();

    let err = service
        .subscribe(NewsletterRequest { email: None })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email required.");
    assert_eq!(repo.get_call_count("add"), 0);
}
