//! Gemini client and AI bridge tests against a mocked `generateContent` endpoint.

use khouse::assistant::{AiBridge, BridgeOutcome, Widget, PLACEHOLDER};
use khouse::llm::{GeminiClient, LLMClient};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

// ============= Helper Functions =============

fn mock_answer(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        "test-key".to_string(),
        format!("{}/v1beta", server.uri()),
        MODEL.to_string(),
        Some(Duration::from_secs(5)),
    )
    .expect("client builds")
}

fn bridge_for(server: &MockServer) -> AiBridge {
    AiBridge::new(Arc::new(client_for(server)), "gemini")
}

// ============= Gemini Client =============

#[tokio::test]
async fn test_request_carries_key_and_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "quiet room" }] }],
            "systemInstruction": { "parts": [{ "text": "be brief" }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer("Studio A")))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_with_system("be brief", "quiet room")
        .await
        .unwrap();

    assert_eq!(response.content.as_deref(), Some("Studio A"));
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
}

#[tokio::test]
async fn test_error_status_with_json_body_has_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": 500, "message": "internal" }
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_with_system("be brief", "hello")
        .await
        .unwrap();
    assert_eq!(response.content, None);
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    assert!(client_for(&server)
        .generate_with_system("be brief", "hello")
        .await
        .is_err());
}

// ============= AI Bridge =============

#[tokio::test]
async fn test_bridge_returns_text_verbatim() {
    let server = MockServer::start().await;
    let text = "  Suite Corner (front)\n\nfits a family of three. ";
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer(text)))
        .mount(&server)
        .await;

    let reply = bridge_for(&server)
        .ask(Widget::Matcher, "family of three")
        .await
        .unwrap();

    assert_eq!(reply.text, text);
    assert_eq!(reply.outcome, BridgeOutcome::Answer);
}

#[tokio::test]
async fn test_bridge_placeholder_when_answer_missing() {
    let bodies = [
        json!({ "candidates": [] }),
        json!({ "candidates": [{ "content": { "parts": [] } }] }),
        mock_answer(""),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let reply = bridge_for(&server).ask(Widget::Chat, "hi").await.unwrap();
        assert_eq!(reply.text, PLACEHOLDER, "body: {body}");
        assert_eq!(reply.outcome, BridgeOutcome::Placeholder);
    }
}

#[tokio::test]
async fn test_bridge_failure_on_bad_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let reply = bridge_for(&server).ask(Widget::Matcher, "hi").await.unwrap();
    assert_eq!(reply.text, "Error connecting to AI.");
    assert_eq!(reply.outcome, BridgeOutcome::Failure);
}

#[tokio::test]
async fn test_bridge_failure_when_unreachable() {
    let client = GeminiClient::new(
        "test-key".to_string(),
        "http://127.0.0.1:1/v1beta".to_string(),
        MODEL.to_string(),
        Some(Duration::from_secs(2)),
    )
    .unwrap();
    let bridge = AiBridge::new(Arc::new(client), "gemini");

    let reply = bridge.ask(Widget::Chat, "hello").await.unwrap();
    assert_eq!(reply.outcome, BridgeOutcome::Failure);
    assert_eq!(reply.text, Widget::Chat.failure_message());
}

#[tokio::test]
async fn test_blank_question_never_reaches_the_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer("unused")))
        .expect(0)
        .mount(&server)
        .await;

    assert!(bridge_for(&server).ask(Widget::Matcher, " \n ").await.is_none());
}
