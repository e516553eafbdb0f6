//! HTTP suggestion backend
//!
//! Talks to an OpenAI-compatible chat-completion endpoint. The request
//! timeout lives on the client, so a hung service surfaces here as
//! `SuggestError::Timeout` and never stalls a caller beyond the configured
//! bound.

use crate::{Result, SuggestConfig, SuggestError, SuggestRequest, SuggestionBackend};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Suggestion backend over an OpenAI-compatible chat endpoint
pub struct HttpSuggestionBackend {
    client: reqwest::Client,
    config: SuggestConfig,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl HttpSuggestionBackend {
    /// Create a backend with the given configuration
    pub fn new(config: SuggestConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SuggestError::transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Create a backend from defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        Self::new(SuggestConfig::from_env())
    }
}

#[async_trait]
impl SuggestionBackend for HttpSuggestionBackend {
    async fn suggest(&self, request: &SuggestRequest) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "user", "content": request.to_prompt()}
            ],
        });

        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SuggestError::Timeout {
                        elapsed_ms: self.config.timeout.as_millis() as u64,
                    }
                } else {
                    SuggestError::transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::transport(format!(
                "endpoint returned {}",
                status
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::malformed(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SuggestError::malformed("response contained no choices"))?;

        tracing::debug!("suggestion backend replied: {}", content.trim());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Ada Lovelace"}}
            ]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Reserved TEST-NET address, nothing listens there.
        let config = SuggestConfig::default()
            .with_url("http://192.0.2.1:1/v1/chat/completions")
            .with_timeout(std::time::Duration::from_millis(200));
        let backend = HttpSuggestionBackend::new(config).unwrap();

        let request = SuggestRequest::new("Task", Vec::new());
        let result = backend.suggest(&request).await;
        assert!(matches!(
            result,
            Err(SuggestError::Transport { .. }) | Err(SuggestError::Timeout { .. })
        ));
    }
}
