//! Integration tests for the Gemini client against a mock server.

use animerec_core::ai::NO_CONTENT_FALLBACK;
use animerec_core::config::ApiConfig;
use animerec_core::{ApiError, CompletionBackend, GeminiClient, Session};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer, timeout_secs: u64) -> GeminiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs,
        ..ApiConfig::default()
    };
    GeminiClient::with_api_config(config, "test-api-key".to_string()).unwrap()
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

#[tokio::test]
async fn test_generate_sends_expected_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    let mut session = Session::default();
    let prompt = session.begin_recommendation("Cowboy Bebop").unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-api-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {"maxOutputTokens": 1024}
        })))
        .respond_with(text_response("**Samurai Champloo**\n* same director"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 10);
    let text = client.complete(&prompt).await.unwrap();
    assert_eq!(text, "**Samurai Champloo**\n* same director");
}

#[tokio::test]
async fn test_missing_text_uses_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let text = client_for(&server, 10).generate("hi").await.unwrap();
    assert_eq!(text, NO_CONTENT_FALLBACK);
}

#[tokio::test]
async fn test_error_status_carries_api_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server, 10).generate("hi").await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid.");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_uses_reason() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server, 10).generate("hi").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_undecodable_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server, 10).generate("hi").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(text_response("late").set_delay(std::time::Duration::from_secs(3)))
        .mount(&server)
        .await;

    let err = client_for(&server, 1).generate("hi").await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {:?}", err);
}
