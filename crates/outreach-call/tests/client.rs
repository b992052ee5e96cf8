//! Integration tests for `CallClient` using wiremock HTTP mocks.

use outreach_call::{CallClient, CallError, CallRequest};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CallClient {
    CallClient::new(base_url, 30, "outreach-test/0.1")
        .expect("client construction should not fail")
}

fn test_request() -> CallRequest {
    CallRequest {
        phone_number: "+1 416 555 0100".to_owned(),
        business_name: "Joe's Diner".to_owned(),
        role: "server".to_owned(),
        employment_type: "Part-time".to_owned(),
        location: "Toronto".to_owned(),
    }
}

#[tokio::test]
async fn make_call_posts_form_fields_and_returns_sid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/make-call"))
        .and(body_string_contains("phone_number="))
        .and(body_string_contains("business_name=Joe%27s+Diner"))
        .and(body_string_contains("role=server"))
        .and(body_string_contains("employment_type=Part-time"))
        .and(body_string_contains("location=Toronto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "call_sid": "CA1234",
            "status": "queued",
            "message": "Call initiated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let initiated = client
        .make_call(&test_request())
        .await
        .expect("submission should be accepted");
    assert_eq!(initiated.call_sid, "CA1234");
}

#[tokio::test]
async fn make_call_surfaces_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/make-call"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "no outbound number configured"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.make_call(&test_request()).await;
    assert!(
        matches!(result, Err(CallError::Rejected(ref msg)) if msg.contains("no outbound number")),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn make_call_without_sid_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/make-call"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.make_call(&test_request()).await;
    assert!(matches!(result, Err(CallError::Rejected(_))));
}

#[tokio::test]
async fn call_status_fetches_by_sid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/call-status/CA1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "completed",
            "hiring_status": "HIRING",
            "completed_at": "2025-11-02T17:45:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let report = client.call_status("CA1234").await.expect("should parse");
    assert!(report.is_terminal());
    assert_eq!(report.hiring_status.as_deref(), Some("HIRING"));
    assert_eq!(report.completed_at.as_deref(), Some("2025-11-02T17:45:00Z"));
}

#[tokio::test]
async fn call_status_surfaces_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.call_status("CA-missing").await;
    assert!(matches!(result, Err(CallError::Http(_))));
}
