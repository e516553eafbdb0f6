//! ListColumns operation

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{Column, ProjectId};
use async_trait::async_trait;
use serde::Deserialize;

/// List a project's columns in display order
#[derive(Debug, Deserialize)]
pub struct ListColumns {
    /// The project whose columns to list
    pub project: ProjectId,
}

impl ListColumns {
    /// Create a new ListColumns operation
    pub fn new(project: ProjectId) -> Self {
        Self { project }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListColumns {
    type Output = Vec<Column>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Column>> {
        // Surface an unknown project as not-found instead of an empty list
        ctx.store().project(&self.project).await?;
        ctx.store().columns_in_project(&self.project).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{InitProject, RegisterMember};
    use std::sync::Arc;
    use taskdeck_suggest::ScriptedSuggestionBackend;

    #[tokio::test]
    async fn test_list_columns_in_display_order() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let owner = RegisterMember::new("Ada", "Lovelace", "owner")
            .execute(&ctx)
            .await
            .unwrap();
        let project = InitProject::new("ACME", "Acme", owner.id)
            .execute(&ctx)
            .await
            .unwrap();

        let columns = ListColumns::new(project.id).execute(&ctx).await.unwrap();
        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["To Do", "In Progress", "Done"]);
    }

    #[tokio::test]
    async fn test_list_columns_unknown_project() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let result = ListColumns::new(ProjectId::new()).execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::ProjectNotFound { .. })));
    }
}
