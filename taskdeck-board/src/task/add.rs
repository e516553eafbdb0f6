//! CreateTask operation

use crate::classify::classify;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{BoardEvent, ColumnId, MemberId, Position, Priority, ProjectId, Task};
use async_trait::async_trait;
use serde::Deserialize;
use taskdeck_common::Pretty;

/// Create a new task in a column
///
/// The task lands at the end of the destination column with a status implied
/// by the column's name (defaulting to TODO when the name is unrecognized).
/// When `auto_assign` is set the assignee is resolved over the project's
/// participants; an explicit assignee always wins over resolution.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    /// The task title (required)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// The owning project
    pub project: ProjectId,
    /// The destination column
    pub column: ColumnId,
    /// Task priority
    #[serde(default)]
    pub priority: Priority,
    /// Explicit assignee, used verbatim
    pub assignee: Option<MemberId>,
    /// Resolve an assignee automatically when none is given
    #[serde(default)]
    pub auto_assign: bool,
    /// The participant creating the task
    pub actor: MemberId,
}

impl CreateTask {
    /// Create a new CreateTask operation
    pub fn new(
        title: impl Into<String>,
        project: ProjectId,
        column: ColumnId,
        actor: MemberId,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            project,
            column,
            priority: Priority::default(),
            assignee: None,
            auto_assign: false,
            actor,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set an explicit assignee
    pub fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Request automatic assignee resolution
    pub fn with_auto_assign(mut self) -> Self {
        self.auto_assign = true;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CreateTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        if self.title.trim().is_empty() {
            return Err(BoardError::missing_field("title"));
        }

        ctx.require_participant(&self.project, &self.actor).await?;
        let project = ctx.store().project(&self.project).await?;

        let column = ctx.store().column(&self.column).await?;
        if column.project != project.id {
            return Err(BoardError::ColumnNotFound {
                id: self.column.to_string(),
            });
        }

        let key = ctx.allocate_task_key(&project).await?;

        // New tasks land at the end of the destination column
        let siblings = ctx.store().tasks_in_column(&column.id).await?;
        let last = siblings.last().map(|t| t.position);
        let position = Position::allocate(last, None);

        let assignee = self.resolve_assignee(ctx, &project).await?;

        let mut task = Task::new(
            self.title.trim(),
            key,
            project.id,
            column.id,
            position,
            self.actor,
        )
        .with_priority(self.priority);
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        task.assignee = assignee;

        // Created tasks default to whatever the column implies, not a
        // hard-coded TODO
        if let Some(status) = classify(&column.name).implied_status() {
            task.apply_status(status);
        }

        ctx.store().upsert_task(&task).await?;
        tracing::debug!("created task: {}", Pretty(&task));
        ctx.publish(&project.id, BoardEvent::task_created(task.clone()))
            .await;

        Ok(task)
    }
}

impl CreateTask {
    /// Decide the assignee: an explicit assignee wins, then automatic
    /// resolution when requested, otherwise unassigned.
    async fn resolve_assignee(
        &self,
        ctx: &BoardContext,
        project: &crate::types::Project,
    ) -> Result<Option<MemberId>> {
        if let Some(explicit) = &self.assignee {
            ctx.store().member(explicit).await?;
            if !project.is_participant(explicit) {
                return Err(BoardError::invalid_value(
                    "assignee",
                    "not a project participant",
                ));
            }
            return Ok(Some(*explicit));
        }

        if !self.auto_assign {
            return Ok(None);
        }

        let candidates = ctx.assignment_candidates(project).await?;
        match ctx
            .resolver()
            .resolve(&self.title, self.description.as_deref(), &candidates)
            .await
        {
            Some(id) => Ok(Some(id)),
            None => Err(BoardError::AssignmentIndeterminate {
                project: project.id.to_string(),
            }),
        }
    }
}
