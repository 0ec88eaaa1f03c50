//! Integration tests for the chat webhook sink against a mock webhook.

use std::time::Duration;

use panelwatch_core::{Message, MessageHandle, MessageSink, SinkError, WebhookSink};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WEBHOOK_PATH: &str = "/api/webhooks/1/token";

fn sink(server: &MockServer) -> WebhookSink {
    WebhookSink::new(
        &format!("{}{}", server.uri(), WEBHOOK_PATH),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_send_posts_and_returns_message_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(WEBHOOK_PATH))
        .and(query_param("wait", "true"))
        .and(body_partial_json(json!({ "content": "Fetching nodes and servers..." })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "998877" })))
        .expect(1)
        .mount(&server)
        .await;

    let handle = sink(&server)
        .send(&Message::text("Fetching nodes and servers..."))
        .await
        .unwrap();
    assert_eq!(handle, MessageHandle::new("998877"));
}

#[tokio::test]
async fn test_edit_patches_message() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{}/messages/998877", WEBHOOK_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "998877" })))
        .expect(1)
        .mount(&server)
        .await;

    sink(&server)
        .edit(&MessageHandle::new("998877"), &Message::text("updated"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_edit_of_deleted_message_is_not_editable() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "code": 10008 })))
        .mount(&server)
        .await;

    let err = sink(&server)
        .edit(&MessageHandle::new("1"), &Message::text("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, SinkError::NotEditable { handle } if handle == "1"));
}

#[tokio::test]
async fn test_rate_limit_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = sink(&server)
        .edit(&MessageHandle::new("1"), &Message::text("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, SinkError::Unavailable { .. }));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_unauthorized_send_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = sink(&server).send(&Message::text("x")).await.unwrap_err();
    assert!(err.is_fatal());
}
