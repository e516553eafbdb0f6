//! UpdateTask operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{MemberId, Priority, Task, TaskId};
use async_trait::async_trait;
use serde::Deserialize;

/// Update a task's descriptive fields
///
/// Status, position and column are owned by the move path and cannot be
/// changed here.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    /// The task to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// The participant performing the change
    pub actor: MemberId,
}

impl UpdateTask {
    /// Create an UpdateTask operation with no changes yet
    pub fn new(id: TaskId, actor: MemberId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            priority: None,
            actor,
        }
    }

    /// Set a new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let mut task = ctx.store().task(&self.id).await?;
        ctx.require_participant(&task.project, &self.actor).await?;

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(BoardError::missing_field("title"));
            }
            task.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }

        ctx.store().upsert_task(&task).await?;
        Ok(task)
    }
}
