//! InitProject operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{Column, MemberId, Project};
use async_trait::async_trait;
use serde::Deserialize;

/// Create a new project with its default column set
///
/// Seeds "To Do" / "In Progress" / "Done", the last marked as the project's
/// canonical done column.
#[derive(Debug, Deserialize)]
pub struct InitProject {
    /// Human-key prefix, e.g. `ACME`
    pub key: String,
    /// Display name
    pub name: String,
    /// The owning member; becomes the first participant
    pub owner: MemberId,
}

impl InitProject {
    /// Create a new InitProject operation
    pub fn new(key: impl Into<String>, name: impl Into<String>, owner: MemberId) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            owner,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for InitProject {
    type Output = Project;

    async fn execute(&self, ctx: &BoardContext) -> Result<Project> {
        let key = self.key.trim();
        if key.is_empty() {
            return Err(BoardError::missing_field("key"));
        }
        if key.contains(char::is_whitespace) || key.contains('-') {
            return Err(BoardError::invalid_value(
                "key",
                "must not contain whitespace or hyphens",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(BoardError::missing_field("name"));
        }

        // Owner must already be registered
        ctx.store().member(&self.owner).await?;

        if ctx.store().project_key_exists(key).await? {
            return Err(BoardError::duplicate("project key", key));
        }

        let project = Project::new(key, self.name.trim(), self.owner);
        ctx.store().upsert_project(&project).await?;

        for column in default_columns(&project) {
            ctx.store().upsert_column(&column).await?;
        }

        Ok(project)
    }
}

/// The default columns seeded into a new project
fn default_columns(project: &Project) -> Vec<Column> {
    vec![
        Column::new(project.id, "To Do", 0),
        Column::new(project.id, "In Progress", 1),
        Column::new(project.id, "Done", 2).as_default(),
    ]
}
