use pretty_assertions::assert_eq;
use serde_json::json;
use skilldesk::{
    Error,
    config::LlmConfig,
    llm::{GatewayClient, LlmClient},
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "test-model".to_string(),
        timeout_seconds: 5,
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
}

#[tokio::test]
async fn test_complete_returns_first_choice_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[1, 2, 3]")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let reply = client.complete("system prompt", "user prompt").await.unwrap();

    assert_eq!(reply, "[1, 2, 3]");
}

#[tokio::test]
async fn test_complete_sends_system_and_user_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "system", "content": "respond with JSON"},
                {"role": "user", "content": "generate a schedule"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    client
        .complete("respond with JSON", "generate a schedule")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rate_limited_gateway_maps_to_rate_limit_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::UpstreamRateLimit));
}

#[tokio::test]
async fn test_exhausted_credits_map_to_quota_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::UpstreamQuota));
}

#[tokio::test]
async fn test_other_gateway_failures_carry_their_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::UpstreamTransport { status: 503 }));
}

#[tokio::test]
async fn test_envelope_without_content_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant"}}]
        })))
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::UpstreamTransport { status: 200 }));
}

#[tokio::test]
async fn test_empty_choices_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = GatewayClient::new(gateway_config(&server.uri())).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::UpstreamTransport { status: 200 }));
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("[]"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = gateway_config(&server.uri());
    config.timeout_seconds = 1;

    let client = GatewayClient::new(config).unwrap();
    let err = client.complete("system", "user").await.unwrap_err();

    assert!(matches!(err, Error::Timeout { seconds: 1 }));
}
