use serde::{Deserialize, Serialize};

use super::ExternalServiceError;
use crate::config;

/// The chat-completion service, consumed as a black box: a fully-built prompt
/// goes in, opaque text comes out. Replies are not parsed beyond being fed
/// through the content filter by the caller.
pub trait CompletionService {
    fn complete(&self, prompt: &str) -> Result<String, ExternalServiceError>;
}

/// HTTP chat-completion client with a fixed timeout and no retry.
pub struct HttpCompletionClient {
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpCompletionClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let timeout_secs = config::COMPLETION_TIMEOUT_SECS;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            system_prompt: None,
            client,
            timeout_secs,
        }
    }

    /// Set a system message sent ahead of every prompt.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn service_name() -> String {
        "completion service".to_string()
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl CompletionService for HttpCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, ExternalServiceError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &self.system_prompt {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: config::COMPLETION_MAX_TOKENS,
            temperature: config::COMPLETION_TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ExternalServiceError::Connection {
                        service: Self::service_name(),
                        url: self.base_url.clone(),
                    }
                } else if e.is_timeout() {
                    ExternalServiceError::Timeout {
                        service: Self::service_name(),
                        seconds: self.timeout_secs,
                    }
                } else {
                    ExternalServiceError::ResponseParsing {
                        service: Self::service_name(),
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Completion service request failed");
            return Err(ExternalServiceError::Status {
                service: Self::service_name(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse =
            response
                .json()
                .map_err(|e| ExternalServiceError::ResponseParsing {
                    service: Self::service_name(),
                    detail: e.to_string(),
                })?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ExternalServiceError::ResponseParsing {
                service: Self::service_name(),
                detail: "Response contained no choices".into(),
            })?;

        Ok(reply)
    }
}
