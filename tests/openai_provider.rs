use std::sync::Arc;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use strategy_explainer::enums::ai_provider_error::AiProviderError;
use strategy_explainer::enums::analysis_result::AnalysisResult;
use strategy_explainer::helpers::prompt_generator::generate_request;
use strategy_explainer::services::ai_providers::openai::OpenAIProvider;
use strategy_explainer::services::strategy_explainer::StrategyExplainer;
use strategy_explainer::structs::analysis_request::AnalysisRequest;
use strategy_explainer::structs::config::ai_config::AiConfig;
use strategy_explainer::traits::ai_provider::AiProvider;

use crate::common::STRATEGY_SOURCE;

fn completion_body(content: &str, total_tokens: u32) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4-0613",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 400, "completion_tokens": total_tokens - 400, "total_tokens": total_tokens }
    })
}

#[tokio::test]
async fn test_chat_sends_two_messages_and_reads_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4", "max_tokens": 1500, "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("- **Strategy Type**: Breakout", 950)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAIProvider::new("sk-test".to_string(), server.uri());
    let completion = provider
        .chat(generate_request(STRATEGY_SOURCE, &AiConfig::default()))
        .await
        .unwrap();

    assert_eq!(completion.text, "- **Strategy Type**: Breakout");
    assert_eq!(completion.total_tokens, 950);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);
    assert_eq!(body["messages"][0]["role"], "system");
    assert!(body["messages"][1]["content"].as_str().unwrap().starts_with("Analyze this NinjaScript strategy:\n\n"));
}

#[tokio::test]
async fn test_unauthorized_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let provider = OpenAIProvider::new("sk-wrong".to_string(), server.uri());
    let error = provider
        .chat(generate_request("EnterLong();", &AiConfig::default()))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        AiProviderError::AuthenticationError("invalid_request_error: Incorrect API key provided".to_string())
    );
}

#[tokio::test]
async fn test_quota_exhaustion_is_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAIProvider::new("sk-test".to_string(), server.uri());
    let error = provider
        .chat(generate_request("EnterLong();", &AiConfig::default()))
        .await
        .unwrap_err();

    assert_eq!(error, AiProviderError::RateLimitError("slow down".to_string()));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let provider = OpenAIProvider::new("sk-test".to_string(), server.uri());
    let error = provider
        .chat(generate_request("EnterLong();", &AiConfig::default()))
        .await
        .unwrap_err();

    assert!(matches!(error, AiProviderError::SerializationError(_)));
}

#[tokio::test]
async fn test_transport_failure_yields_error_only_result() {
    // Nothing listens on port 9 locally.
    let provider = OpenAIProvider::new("sk-test".to_string(), "http://127.0.0.1:9".to_string());
    let explainer = StrategyExplainer::new(Arc::new(provider), AiConfig::default());

    let result = explainer
        .analyze_strategy(&AnalysisRequest::new(STRATEGY_SOURCE).unwrap())
        .await;

    match &result {
        AnalysisResult::Failure { error } => assert!(error.starts_with("Network Error:")),
        other => panic!("expected failure, got {:?}", other),
    }

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("tokens_used").is_none());
    assert!(json.get("cost_estimate").is_none());
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_explainer_uses_configured_rate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok", 1000)))
        .mount(&server)
        .await;

    let provider = OpenAIProvider::new("sk-test".to_string(), server.uri());
    let explainer = StrategyExplainer::new(Arc::new(provider), AiConfig::default());

    let result = explainer
        .analyze_strategy(&AnalysisRequest::new(STRATEGY_SOURCE).unwrap())
        .await;

    assert_eq!(
        result,
        AnalysisResult::Success { analysis: "ok".to_string(), tokens_used: 1000, cost_estimate: 1000.0 * 0.00003 }
    );
}
