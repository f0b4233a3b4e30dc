// HTTP AI delegate tests against a mock provider
// Author: kelexine (https://github.com/kelexine)

use aiseo::ai::{AiDelegate, AiOutcome, DelegateError, HttpAiDelegate, ProviderOptions};
use aiseo::config::AiConfig;
use mockito::{Matcher, Server};
use serde_json::json;

fn delegate() -> HttpAiDelegate {
    HttpAiDelegate::new(&AiConfig {
        openai_api_key: Some("sk-configured".to_string()),
        timeout_seconds: 2,
        ..Default::default()
    })
    .unwrap()
}

fn pointed_at(url: String) -> ProviderOptions {
    ProviderOptions {
        endpoint: Some(url),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_successful_response_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let body = json!({
        "id": "chatcmpl-1",
        "choices": [{"message": {"role": "assistant", "content": "Add more headings."}}]
    });

    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-configured")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": "Analyze this content for SEO:"},
                {"role": "user", "content": "<h1>Hello</h1>"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let options = pointed_at(format!("{}/v1/chat/completions", server.url()));
    let outcome = delegate().delegate("<h1>Hello</h1>", "openai", &options).await;

    mock.assert_async().await;
    assert_eq!(outcome, AiOutcome::Response(body));
}

#[tokio::test]
async fn test_overrides_reach_the_provider() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/custom")
        .match_header("authorization", "Bearer sk-per-call")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4",
            "messages": [{"role": "system", "content": "Rate this:"}, {"role": "user", "content": "text"}]
        })))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let options = ProviderOptions {
        prompt: Some("Rate this:".to_string()),
        api_key: Some("sk-per-call".to_string()),
        model: Some("gpt-4".to_string()),
        endpoint: Some(format!("{}/custom", server.url())),
    };
    let outcome = delegate().delegate("text", "self-hosted", &options).await;

    mock.assert_async().await;
    assert_eq!(outcome.response(), Some(&json!({"ok": true})));
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let options = pointed_at(format!("{}/v1/chat/completions", server.url()));
    let outcome = delegate().delegate("content", "openai", &options).await;

    mock.assert_async().await;
    match outcome.error() {
        Some(DelegateError::TransportFailure(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_parse_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let options = pointed_at(format!("{}/v1/chat/completions", server.url()));
    let outcome = delegate().delegate("content", "openai", &options).await;

    assert_eq!(outcome.label(), "parse_failure");
    assert!(outcome.is_error());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    let options = pointed_at("http://127.0.0.1:1/v1/chat/completions".to_string());
    let outcome = delegate().delegate("content", "openai", &options).await;

    assert_eq!(outcome.label(), "transport_failure");
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let options = pointed_at(format!("{}/v1/seo", server.url()));
    let outcome = delegate().delegate("content", "deepseek", &options).await;

    mock.assert_async().await;
    assert_eq!(
        outcome.error(),
        Some(&DelegateError::ConfigurationMissing {
            provider: "deepseek".to_string()
        })
    );
}
