//! Event sink for real-time board updates
//!
//! Publishing is fire-and-forget: the channel exists to refresh UIs, not to
//! carry correctness. Callers go through `BoardContext::publish`, which logs
//! a failed publish and swallows it.

use crate::types::BoardEvent;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

/// Error from an event sink implementation
#[derive(Debug, Error)]
#[error("event publish failed: {message}")]
pub struct EventError {
    message: String,
}

impl EventError {
    /// Create a publish error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for event channels
///
/// Failures are non-fatal to every caller; implementations should not retry.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish one event on a topic
    async fn publish(&self, topic: &str, event: &BoardEvent) -> Result<(), EventError>;
}

/// In-process event sink over a tokio broadcast channel
///
/// Subscribers receive `(topic, event)` pairs. Publishing with no live
/// subscribers is a no-op, not an error.
pub struct BroadcastEventSink {
    tx: broadcast::Sender<(String, BoardEvent)>,
}

impl BroadcastEventSink {
    /// Create a sink with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all published events
    pub fn subscribe(&self) -> broadcast::Receiver<(String, BoardEvent)> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl EventSink for BroadcastEventSink {
    async fn publish(&self, topic: &str, event: &BoardEvent) -> Result<(), EventError> {
        // send() errs only when no receiver is subscribed; for a broadcast
        // refresh channel that is the quiet case, not a failure.
        let _ = self.tx.send((topic.to_string(), event.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnId, MemberId, Position, ProjectId, Task};

    fn sample_event(project: ProjectId) -> BoardEvent {
        BoardEvent::task_created(Task::new(
            "Task",
            "T-1",
            project,
            ColumnId::new(),
            Position::BASE,
            MemberId::new(),
        ))
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let sink = BroadcastEventSink::default();
        let mut rx = sink.subscribe();
        let project = ProjectId::new();

        sink.publish(&BoardEvent::topic(&project), &sample_event(project))
            .await
            .unwrap();

        let (topic, event) = rx.recv().await.unwrap();
        assert_eq!(topic, format!("project:{}", project));
        assert_eq!(event.name(), "task-created");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ok() {
        let sink = BroadcastEventSink::default();
        let project = ProjectId::new();
        sink.publish("project:none", &sample_event(project))
            .await
            .unwrap();
    }
}
