use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Seam between the pipeline and the model provider. Tests substitute a stub
/// returning canned text so generation runs deterministically offline.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one system + user message pair and returns the model's free-text
    /// reply from `choices[0].message.content`.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Client for an OpenAI-compatible chat-completion gateway.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_seconds: u64,
}

impl GatewayClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::config("LLM API key is not configured"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
            timeout_seconds: config.timeout_seconds,
        })
    }
}

#[async_trait]
impl LlmClient for GatewayClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        debug!("Posting chat completion to {}", self.base_url);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout {
                        seconds: self.timeout_seconds,
                    }
                } else {
                    Error::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => Error::UpstreamRateLimit,
                402 => Error::UpstreamQuota,
                code => Error::UpstreamTransport { status: code },
            });
        }

        let envelope: ChatCompletionResponse = response.json().await?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) => {
                debug!("Received model reply ({} chars)", text.len());
                Ok(text)
            }
            None => Err(Error::UpstreamTransport {
                status: status.as_u16(),
            }),
        }
    }
}
