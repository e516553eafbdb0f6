//! Configuration for the HTTP suggestion backend

use std::time::Duration;

/// Environment variable overriding the endpoint URL
pub const ENV_URL: &str = "TASKDECK_SUGGEST_URL";
/// Environment variable overriding the model name
pub const ENV_MODEL: &str = "TASKDECK_SUGGEST_MODEL";
/// Environment variable overriding the request timeout, in milliseconds
pub const ENV_TIMEOUT_MS: &str = "TASKDECK_SUGGEST_TIMEOUT_MS";

const DEFAULT_URL: &str = "http://127.0.0.1:11434/v1/chat/completions";
const DEFAULT_MODEL: &str = "qwen2.5:3b";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for `HttpSuggestionBackend`
///
/// Defaults target a local OpenAI-compatible chat endpoint. Each knob can be
/// overridden via environment variables; unparseable values fall back to the
/// default rather than failing startup, since the suggestion service is
/// advisory.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Chat-completion endpoint URL
    pub url: String,
    /// Model name sent with each request
    pub model: String,
    /// Client-owned request timeout
    pub timeout: Duration,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SuggestConfig {
    /// Build a config from defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_URL) {
            if !url.trim().is_empty() {
                config.url = url;
            }
        }
        if let Ok(model) = std::env::var(ENV_MODEL) {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_MS) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => tracing::warn!("ignoring unparseable {}: {:?}", ENV_TIMEOUT_MS, raw),
            }
        }
        config
    }

    /// Set the endpoint URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
