//! Assignee suggestion backend abstraction for taskdeck
//!
//! This crate is the boundary between the board engine and the external
//! language-model completion service that proposes an assignee for a task.
//! The service returns free text with no structured contract; translating
//! that text into a real member identifier (or ignoring it entirely) is the
//! board engine's job, not this crate's.
//!
//! # Architecture
//!
//! - `SuggestionBackend` trait - abstract interface for suggestion calls
//! - `HttpSuggestionBackend` - calls a chat-completion HTTP endpoint
//! - `ScriptedSuggestionBackend` - plays back queued replies for tests
//!
//! Tests that exercise assignment logic use the scripted backend so they are
//! fast, deterministic and fully offline.

mod config;
mod http;
mod scripted;

pub use config::SuggestConfig;
pub use http::HttpSuggestionBackend;
pub use scripted::ScriptedSuggestionBackend;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Result type for suggestion calls
pub type Result<T> = std::result::Result<T, SuggestError>;

/// One assignment candidate as presented to the suggestion service
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    /// Display name, e.g. "Ada Lovelace"
    pub name: String,
    /// Current role within the team
    pub role: String,
    /// Historical completed-task count, for the model's context
    pub completed: usize,
}

/// Input to a suggestion call
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    /// The task title
    pub title: String,
    /// The task description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The candidate pool the service may pick from
    pub candidates: Vec<CandidateSummary>,
}

impl SuggestRequest {
    /// Create a request for the given task and candidate pool
    pub fn new(title: impl Into<String>, candidates: Vec<CandidateSummary>) -> Self {
        Self {
            title: title.into(),
            description: None,
            candidates,
        }
    }

    /// Set the task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render the request as a plain-text prompt for a chat completion call
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "A task needs an assignee.\nTitle: {}\n",
            self.title
        );
        if let Some(description) = &self.description {
            prompt.push_str(&format!("Description: {}\n", description));
        }
        prompt.push_str("Team members:\n");
        for candidate in &self.candidates {
            prompt.push_str(&format!(
                "- {} ({}, {} tasks completed)\n",
                candidate.name, candidate.role, candidate.completed
            ));
        }
        prompt.push_str("Reply with the name of the best-suited team member.");
        prompt
    }
}

/// Errors from a suggestion backend
///
/// These never cross the board engine's API boundary: every caller recovers
/// by falling back to its deterministic workload heuristic.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The request could not be sent or the connection failed
    #[error("suggestion request failed: {message}")]
    Transport { message: String },

    /// The backend did not answer within its configured timeout
    #[error("suggestion request timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// The response body did not have the expected shape
    #[error("malformed suggestion response: {message}")]
    Malformed { message: String },

    /// A scripted backend ran out of queued replies
    #[error("no scripted reply available")]
    Exhausted,
}

impl SuggestError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Trait for suggestion backends
///
/// The reply is free text that usually contains a person's name. Backends own
/// their timeout; callers treat every error identically (no suggestion).
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Ask the service for an assignee suggestion
    async fn suggest(&self, request: &SuggestRequest) -> Result<String>;
}
