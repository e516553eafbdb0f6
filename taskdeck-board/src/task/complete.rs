//! CompleteTask operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::task::MoveTask;
use crate::types::{MemberId, Task, TaskId};
use async_trait::async_trait;
use serde::Deserialize;

/// Mark a task complete by moving it to the project's default done column
///
/// Shares the move path, so status and completion timestamp follow the
/// destination column's classification like any other move.
#[derive(Debug, Deserialize)]
pub struct CompleteTask {
    /// The task to complete
    pub id: TaskId,
    /// The participant performing the change
    pub actor: MemberId,
}

impl CompleteTask {
    /// Create a new CompleteTask operation
    pub fn new(id: TaskId, actor: MemberId) -> Self {
        Self { id, actor }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CompleteTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let task = ctx.store().task(&self.id).await?;

        let columns = ctx.store().columns_in_project(&task.project).await?;
        let target = columns
            .into_iter()
            .find(|c| c.is_default)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: "default".to_string(),
            })?;

        MoveTask::new(self.id, target.id, self.actor)
            .execute(ctx)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{InitProject, RegisterMember};
    use crate::task::CreateTask;
    use crate::types::Status;
    use std::sync::Arc;
    use taskdeck_suggest::ScriptedSuggestionBackend;

    #[tokio::test]
    async fn test_complete_task_moves_to_default_column() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let owner = RegisterMember::new("Ada", "Lovelace", "owner")
            .execute(&ctx)
            .await
            .unwrap();
        let project = InitProject::new("ACME", "Acme", owner.id)
            .execute(&ctx)
            .await
            .unwrap();
        let columns = ctx
            .store()
            .columns_in_project(&project.id)
            .await
            .unwrap();

        let task = CreateTask::new("Task", project.id, columns[0].id, owner.id)
            .execute(&ctx)
            .await
            .unwrap();

        let completed = CompleteTask::new(task.id, owner.id)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(completed.column, columns[2].id);
        assert_eq!(completed.status, Status::Done);
        assert!(completed.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_complete_nonexistent_task() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let result = CompleteTask::new(TaskId::new(), MemberId::new())
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
