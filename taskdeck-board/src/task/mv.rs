//! MoveTask operation

use crate::classify::classify;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{BoardEvent, ColumnId, MemberId, Position, Task, TaskId};
use async_trait::async_trait;
use serde::Deserialize;

/// Move a task to a column, optionally at a specific drop index
///
/// The target column's name decides the task's new status; an unrecognized
/// name leaves the status untouched while column and position still update.
/// Any transition is accepted - the classifier reflects the current drop
/// target, not a workflow policy - and leaving DONE clears the completion
/// timestamp.
#[derive(Debug, Deserialize)]
pub struct MoveTask {
    /// The task to move
    pub id: TaskId,
    /// The target column
    pub column: ColumnId,
    /// Drop index within the target column; out-of-range values clamp to
    /// the end, absent means the end
    pub index: Option<usize>,
    /// The participant performing the move
    pub actor: MemberId,
}

impl MoveTask {
    /// Create a MoveTask operation dropping at the end of the column
    pub fn new(id: TaskId, column: ColumnId, actor: MemberId) -> Self {
        Self {
            id,
            column,
            index: None,
            actor,
        }
    }

    /// Set the drop index
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let mut task = ctx.store().task(&self.id).await?;
        ctx.require_participant(&task.project, &self.actor).await?;

        let target = ctx.store().column(&self.column).await?;
        if target.project != task.project {
            return Err(BoardError::ColumnNotFound {
                id: self.column.to_string(),
            });
        }

        // Snapshot the target column without the moving task, then allocate
        // between the neighbors around the requested drop index.
        let mut siblings = ctx.store().tasks_in_column(&target.id).await?;
        siblings.retain(|t| t.id != task.id);

        let index = self.index.unwrap_or(siblings.len()).min(siblings.len());
        let prev = index.checked_sub(1).map(|i| siblings[i].position);
        let next = siblings.get(index).map(|t| t.position);

        let from = task.column;
        task.column = target.id;
        task.position = Position::allocate(prev, next);

        // Unknown classification leaves the existing status untouched
        if let Some(status) = classify(&target.name).implied_status() {
            task.apply_status(status);
        }

        ctx.store().upsert_task(&task).await?;
        tracing::debug!(
            "moved task {} from {} to {} at {:?}",
            task.key,
            from,
            target.id,
            task.position
        );
        ctx.publish(
            &task.project,
            BoardEvent::task_moved(task.clone(), from, target.id),
        )
        .await;

        Ok(task)
    }
}
