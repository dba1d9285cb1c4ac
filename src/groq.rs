use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{ConfigError, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Answer(String),
    /// The reply decoded but did not carry assistant text.
    UnexpectedShape(String),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<Completion, ServiceError>;
}

pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::new(config.api_key.clone(), &config.base_url, config.timeout_ms)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    role: String,
    content: Option<String>,
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<Completion, ServiceError> {
        let body = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(endpoint = %self.endpoint, model, "sending chat completion");
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ServiceError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| ServiceError::Malformed(e.to_string()))?;
        Ok(classify(parsed))
    }
}

fn classify(response: ChatResponse) -> Completion {
    let Some(choice) = response.choices.into_iter().next() else {
        return Completion::UnexpectedShape("response contained no choices".to_string());
    };
    let Some(message) = choice.message else {
        return Completion::UnexpectedShape("first choice has no message".to_string());
    };
    if message.role != "assistant" {
        return Completion::UnexpectedShape(format!(
            "expected an assistant message, got role {:?}",
            message.role
        ));
    }
    match message.content {
        Some(content) => Completion::Answer(content),
        None => Completion::UnexpectedShape("assistant message has no content".to_string()),
    }
}
