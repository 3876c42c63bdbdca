use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use url::Url;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    location_analysis::{ports::LLMClient, schema::ANALYSIS_SCHEMA_NAME},
};

const BASE_BACKOFF_MS: u64 = 250;
const MAX_JITTER_MS: u64 = 100;

/// Client for OpenAI-compatible chat completion APIs.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    config: LLMConfig,
    endpoint: Url,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: &'static str,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let endpoint = chat_completions_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call_chat_completions(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let mut attempt = 0;

        loop {
            match self.send_once(api_key, request).await {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "retrying LLM request: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn send_once(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("LLM API request failed: {}", e);
                CoreError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("LLM API error: {} - {}", status, error_text);
            return Err(CoreError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read LLM response body: {}", e);
            CoreError::Transport(e.to_string())
        })?;

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse LLM response: {}", e);
            CoreError::MalformedResponse(format!("Failed to parse LLM response: {}", e))
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);

        Ok(content.unwrap_or_else(|| {
            warn!("LLM response carried no message content");
            "{}".to_string()
        }))
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let api_key = match self.config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => return Err(CoreError::missing_api_key()),
        };

        let request = ChatCompletionRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: ANALYSIS_SCHEMA_NAME,
                    strict: true,
                    schema: response_schema,
                },
            },
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        self.call_chat_completions(api_key, &request).await
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

fn chat_completions_url(base_url: &str) -> Result<Url, CoreError> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|url| url.join("chat/completions"))
        .map_err(|e| CoreError::Configuration(format!("Invalid LLM base URL '{}': {}", base_url, e)))
}

fn backoff_delay(attempt: u32) -> Duration {
    let base = BASE_BACKOFF_MS.saturating_mul(1u64 << attempt.min(6));
    let jitter = rand::thread_rng().gen_range(0..=MAX_JITTER_MS);
    Duration::from_millis(base + jitter)
}
