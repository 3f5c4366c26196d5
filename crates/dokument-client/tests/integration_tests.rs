//! Integration tests for dokument-client
//!
//! These tests run the client against a fake journal backend on a real
//! socket.

use std::time::Duration;

use dokument_client::testing::FakeUpstream;
use dokument_client::{ClientError, JournalClient};
use dokument_core::{BearerToken, EditJournalEntryCommand, JournalEntry};
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn bearer() -> BearerToken {
    BearerToken::new("test-token")
}

#[tokio::test]
async fn get_decodes_body_and_forwards_bearer() {
    let upstream = FakeUpstream::new();
    upstream.respond(
        "GET",
        "/journalpost/1",
        200,
        Some(json!({ "avsenderNavn": "Grev Still E. Ben" })),
    );
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await
        .unwrap();

    assert_eq!(result.status(), StatusCode::OK);
    assert_eq!(
        result.body().and_then(|e| e.sender_name.as_deref()),
        Some("Grev Still E. Ben")
    );
    let requests = upstream.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn get_sends_query_parameters() {
    let upstream = FakeUpstream::new();
    upstream.respond("GET", "/sak/101", 200, Some(json!([])));
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();

    client
        .get::<Vec<JournalEntry>>("/sak/101", &[("fagomrade", "BID")], &bearer())
        .await
        .unwrap();

    assert_eq!(upstream.requests()[0].query.as_deref(), Some("fagomrade=BID"));
}

#[tokio::test]
async fn empty_success_is_no_content() {
    let upstream = FakeUpstream::new();
    upstream.respond("GET", "/journalpost/1", 200, None);
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await
        .unwrap();

    assert_eq!(result.status(), StatusCode::NO_CONTENT);
    assert!(result.body().is_none());
}

#[tokio::test]
async fn error_status_is_carried_not_raised() {
    let upstream = FakeUpstream::new();
    upstream.respond(
        "GET",
        "/journalpost/1",
        500,
        Some(json!({ "error": "boom" })),
    );
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await
        .unwrap();

    assert_eq!(result.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(result.body().is_none());
}

#[tokio::test]
async fn post_sends_unit_header_and_body() {
    let upstream = FakeUpstream::new();
    upstream.respond("POST", "/journalpost", 202, None);
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();
    let command = EditJournalEntryCommand {
        id: Some("BID-1".to_string()),
        ..Default::default()
    };

    let result = client
        .post_status_only("/journalpost", &command, Some("4806"), &bearer())
        .await
        .unwrap();

    assert_eq!(result.status(), StatusCode::ACCEPTED);
    let request = &upstream.requests()[0];
    assert_eq!(request.unit.as_deref(), Some("4806"));
    assert_eq!(
        request.body.as_ref().and_then(|b| b.get("journalpostId")),
        Some(&json!("BID-1"))
    );
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    let upstream = FakeUpstream::new();
    upstream.respond("GET", "/journalpost/1", 200, Some(json!("not an entry")));
    let server = upstream.start().await.unwrap();
    let client = JournalClient::new(&server.base_url()).unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await;

    assert!(matches!(result, Err(ClientError::ParseError(_))));
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let upstream = FakeUpstream::new();
    let server = upstream.start().await.unwrap();
    let base_url = server.base_url();
    server.shutdown().await;

    let client = JournalClient::with_config(
        &base_url,
        Duration::from_secs(2),
        Duration::from_secs(1),
    )
    .unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await;

    assert!(matches!(result, Err(ClientError::ConnectionFailed(_))));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let upstream = FakeUpstream::new();
    upstream.respond_after(
        "GET",
        "/journalpost/1",
        Duration::from_millis(500),
        200,
        Some(json!({})),
    );
    let server = upstream.start().await.unwrap();
    let client = JournalClient::with_config(
        &server.base_url(),
        Duration::from_millis(100),
        Duration::from_secs(1),
    )
    .unwrap();

    let result = client
        .get::<JournalEntry>("/journalpost/1", &[], &bearer())
        .await;

    assert!(matches!(result, Err(ClientError::Timeout)));
}
