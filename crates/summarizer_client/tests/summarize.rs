use std::net::TcpListener;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use summarizer_client::{
    ClientSettings, FailureKind, ReqwestSummaryClient, SummaryClient, GENERIC_API_ERROR,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestSummaryClient {
    let settings = ClientSettings::with_base_url(&server.uri()).expect("valid base url");
    ReqwestSummaryClient::new(settings).expect("client")
}

async fn mount_summarize(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn posts_json_url_and_returns_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "# Hi" })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = client_for(&server)
        .request_summary("example.com")
        .await
        .expect("summary");
    assert_eq!(summary, "# Hi");
}

#[tokio::test]
async fn base_url_with_trailing_slash_hits_same_endpoint() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "summary": "ok" })),
    )
    .await;

    let settings = ClientSettings::with_base_url(&format!("{}/", server.uri())).unwrap();
    let client = ReqwestSummaryClient::new(settings).unwrap();
    assert_eq!(client.request_summary("example.com").await.unwrap(), "ok");
}

#[tokio::test]
async fn missing_summary_field_yields_empty_text() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "other": 1 })),
    )
    .await;

    let summary = client_for(&server)
        .request_summary("example.com")
        .await
        .expect("summary");
    assert_eq!(summary, "");
}

#[tokio::test]
async fn error_status_uses_backend_error_field() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({ "error": "bad site" })),
    )
    .await;

    let err = client_for(&server)
        .request_summary("example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "bad site");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn error_status_with_unparsable_body_uses_generic_message() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
    )
    .await;

    let err = client_for(&server)
        .request_summary("example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, GENERIC_API_ERROR);
}

#[tokio::test]
async fn error_status_with_blank_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({ "error": "" })),
    )
    .await;

    let err = client_for(&server)
        .request_summary("example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, GENERIC_API_ERROR);
}

#[tokio::test]
async fn success_status_with_malformed_body_fails() {
    let server = MockServer::start().await;
    mount_summarize(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = client_for(&server)
        .request_summary("example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
    assert_eq!(err.message, GENERIC_API_ERROR);
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let settings = ClientSettings::with_base_url(&format!("http://127.0.0.1:{port}")).unwrap();
    let client = ReqwestSummaryClient::new(settings).unwrap();

    let err = client.request_summary("example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Transport);
    assert!(err.is_transport());
    assert!(!err.message.trim().is_empty());
}

#[tokio::test]
async fn optional_timeout_is_enforced() {
    let server = MockServer::start().await;
    mount_summarize(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_json(json!({ "summary": "late" })),
    )
    .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::with_base_url(&server.uri()).unwrap()
    };
    let client = ReqwestSummaryClient::new(settings).unwrap();

    let err = client.request_summary("example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert!(err.is_transport());
}
