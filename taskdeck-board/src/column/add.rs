//! AddColumn operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{Column, MemberId, ProjectId};
use async_trait::async_trait;
use serde::Deserialize;

/// Append a new column to a project's board
///
/// The display name is free text; whatever status it implies for entering
/// tasks is decided later by classification, not stored here.
#[derive(Debug, Deserialize)]
pub struct AddColumn {
    /// The owning project
    pub project: ProjectId,
    /// The column display name
    pub name: String,
    /// The participant performing the change
    pub actor: MemberId,
}

impl AddColumn {
    /// Create a new AddColumn operation
    pub fn new(project: ProjectId, name: impl Into<String>, actor: MemberId) -> Self {
        Self {
            project,
            name: name.into(),
            actor,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> Result<Column> {
        if self.name.trim().is_empty() {
            return Err(BoardError::missing_field("name"));
        }

        ctx.require_participant(&self.project, &self.actor).await?;
        let project = ctx.store().project(&self.project).await?;

        let columns = ctx.store().columns_in_project(&project.id).await?;
        let order = columns.iter().map(|c| c.order + 1).max().unwrap_or(0);

        let column = Column::new(project.id, self.name.trim(), order);
        ctx.store().upsert_column(&column).await?;
        Ok(column)
    }
}
