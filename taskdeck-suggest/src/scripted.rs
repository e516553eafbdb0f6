//! Scripted suggestion backend for playback in tests
//!
//! Queues replies (or errors) ahead of time and hands them out in order,
//! counting calls so tests can assert the backend was consulted exactly once
//! per resolution.

use crate::{Result, SuggestError, SuggestRequest, SuggestionBackend};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Suggestion backend that plays back queued replies
///
/// An empty queue yields `SuggestError::Exhausted`, which callers treat like
/// any other backend failure.
#[derive(Default)]
pub struct ScriptedSuggestionBackend {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: AtomicUsize,
}

impl ScriptedSuggestionBackend {
    /// Create a backend with no queued replies (every call fails)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that answers once with the given text
    pub fn with_reply(reply: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.push_reply(reply);
        backend
    }

    /// Queue a successful reply
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.replies
            .lock()
            .expect("scripted reply queue poisoned")
            .push_back(Ok(reply.into()));
    }

    /// Queue a failure
    pub fn push_error(&self, error: SuggestError) {
        self.replies
            .lock()
            .expect("scripted reply queue poisoned")
            .push_back(Err(error));
    }

    /// Number of `suggest` calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionBackend for ScriptedSuggestionBackend {
    async fn suggest(&self, _request: &SuggestRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .expect("scripted reply queue poisoned")
            .pop_front()
            .unwrap_or(Err(SuggestError::Exhausted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_play_back_in_order() {
        let backend = ScriptedSuggestionBackend::new();
        backend.push_reply("Ada Lovelace");
        backend.push_error(SuggestError::Timeout { elapsed_ms: 10 });

        let request = SuggestRequest::new("Task", Vec::new());

        let first = backend.suggest(&request).await.unwrap();
        assert_eq!(first, "Ada Lovelace");

        let second = backend.suggest(&request).await;
        assert!(matches!(second, Err(SuggestError::Timeout { .. })));

        // Queue drained - further calls are exhausted
        let third = backend.suggest(&request).await;
        assert!(matches!(third, Err(SuggestError::Exhausted)));

        assert_eq!(backend.calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_backend_always_fails() {
        let backend = ScriptedSuggestionBackend::new();
        let request = SuggestRequest::new("Task", Vec::new());
        assert!(backend.suggest(&request).await.is_err());
        assert_eq!(backend.calls(), 1);
    }
}
