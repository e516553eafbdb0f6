//! AssignTask and UnassignTask operations

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{MemberId, Task, TaskId};
use async_trait::async_trait;
use serde::Deserialize;

/// Assign a member to a task
#[derive(Debug, Deserialize)]
pub struct AssignTask {
    /// The task to assign
    pub id: TaskId,
    /// The member receiving the task
    pub assignee: MemberId,
    /// The participant performing the change
    pub actor: MemberId,
}

impl AssignTask {
    /// Create a new AssignTask operation
    pub fn new(id: TaskId, assignee: MemberId, actor: MemberId) -> Self {
        Self {
            id,
            assignee,
            actor,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AssignTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let mut task = ctx.store().task(&self.id).await?;
        ctx.require_participant(&task.project, &self.actor).await?;

        ctx.store().member(&self.assignee).await?;
        let project = ctx.store().project(&task.project).await?;
        if !project.is_participant(&self.assignee) {
            return Err(BoardError::invalid_value(
                "assignee",
                "not a project participant",
            ));
        }

        task.assignee = Some(self.assignee);
        ctx.store().upsert_task(&task).await?;
        Ok(task)
    }
}

/// Remove a task's assignee
#[derive(Debug, Deserialize)]
pub struct UnassignTask {
    /// The task to unassign
    pub id: TaskId,
    /// The participant performing the change
    pub actor: MemberId,
}

impl UnassignTask {
    /// Create a new UnassignTask operation
    pub fn new(id: TaskId, actor: MemberId) -> Self {
        Self { id, actor }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UnassignTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let mut task = ctx.store().task(&self.id).await?;
        ctx.require_participant(&task.project, &self.actor).await?;

        task.assignee = None;
        ctx.store().upsert_task(&task).await?;
        Ok(task)
    }
}
