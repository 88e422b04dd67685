use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use summarizer_client::{
    BackendHealth, ClientEvent, ClientHandle, ClientSettings, FailureKind, SummarizeError,
    SummaryClient,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn next_event(handle: &ClientHandle) -> ClientEvent {
    for _ in 0..200 {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("no client event within 2s");
}

#[tokio::test]
async fn handle_reports_summary_with_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "# Hi" })))
        .mount(&server)
        .await;

    let handle = ClientHandle::new(ClientSettings::with_base_url(&server.uri()).unwrap())
        .expect("handle");
    handle.submit(7, "example.com").expect("queued");

    assert_eq!(
        next_event(&handle).await,
        ClientEvent::SummaryCompleted {
            request_id: 7,
            result: Ok("# Hi".to_string()),
        }
    );
}

struct CountingClient {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl SummaryClient for CountingClient {
    async fn request_summary(&self, url: &str) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url == "fail.example.com" {
            Err(SummarizeError {
                kind: FailureKind::Transport,
                message: "connection refused".to_string(),
            })
        } else {
            Ok(format!("summary of {url}"))
        }
    }

    async fn check_health(&self) -> Result<BackendHealth, SummarizeError> {
        Ok(BackendHealth {
            status: "ok".to_string(),
            mode: None,
            model: None,
        })
    }
}

#[tokio::test]
async fn every_command_yields_exactly_one_event() {
    let client = Arc::new(CountingClient {
        calls: AtomicUsize::new(0),
    });
    let handle = ClientHandle::with_client(client.clone()).expect("handle");

    handle.submit(1, "ok.example.com").unwrap();
    handle.submit(2, "fail.example.com").unwrap();
    handle.check_health().unwrap();

    let mut events = Vec::new();
    for _ in 0..3 {
        events.push(next_event(&handle).await);
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(handle.try_recv().is_none());
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);

    assert!(events.contains(&ClientEvent::SummaryCompleted {
        request_id: 1,
        result: Ok("summary of ok.example.com".to_string()),
    }));
    assert!(events.iter().any(|event| matches!(
        event,
        ClientEvent::SummaryCompleted { request_id: 2, result: Err(err) }
            if err.message == "connection refused"
    )));
    assert!(events
        .iter()
        .any(|event| matches!(event, ClientEvent::HealthChecked(Ok(_)))));
}

#[test]
fn stopped_handle_rejects_commands() {
    let handle = ClientHandle::stopped();
    let err = handle.submit(1, "example.com").unwrap_err();
    assert_eq!(err.kind, FailureKind::Transport);
    assert!(handle.check_health().is_err());
    assert!(handle.try_recv().is_none());
}
