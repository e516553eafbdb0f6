//! RegisterMember and JoinProject operations

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::execute::Execute;
use crate::store::BoardStore;
use crate::types::{Member, MemberId, Project, ProjectId};
use async_trait::async_trait;
use serde::Deserialize;

/// Register a new team member
#[derive(Debug, Deserialize)]
pub struct RegisterMember {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl RegisterMember {
    /// Create a new RegisterMember operation
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for RegisterMember {
    type Output = Member;

    async fn execute(&self, ctx: &BoardContext) -> Result<Member> {
        if self.first_name.trim().is_empty() {
            return Err(BoardError::missing_field("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(BoardError::missing_field("last_name"));
        }

        let member = Member::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.role.trim(),
        );
        ctx.store().upsert_member(&member).await?;
        Ok(member)
    }
}

/// Add a registered member to a project's roster
#[derive(Debug, Deserialize)]
pub struct JoinProject {
    /// The project to join
    pub project: ProjectId,
    /// The member joining
    pub member: MemberId,
    /// The participant performing the change
    pub actor: MemberId,
}

impl JoinProject {
    /// Create a new JoinProject operation
    pub fn new(project: ProjectId, member: MemberId, actor: MemberId) -> Self {
        Self {
            project,
            member,
            actor,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for JoinProject {
    type Output = Project;

    async fn execute(&self, ctx: &BoardContext) -> Result<Project> {
        ctx.require_participant(&self.project, &self.actor).await?;

        let mut project = ctx.store().project(&self.project).await?;
        ctx.store().member(&self.member).await?;

        // Joining twice is idempotent
        if !project.is_participant(&self.member) {
            project.members.push(self.member);
            ctx.store().upsert_project(&project).await?;
        }
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::InitProject;
    use std::sync::Arc;
    use taskdeck_suggest::ScriptedSuggestionBackend;

    async fn setup() -> (BoardContext, Project) {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let owner = RegisterMember::new("Ada", "Lovelace", "owner")
            .execute(&ctx)
            .await
            .unwrap();
        let project = InitProject::new("ACME", "Acme", owner.id)
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, project)
    }

    #[tokio::test]
    async fn test_register_member_trims_fields() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let member = RegisterMember::new(" Grace ", " Hopper ", "engineer")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(member.full_name(), "Grace Hopper");
    }

    #[tokio::test]
    async fn test_register_member_requires_names() {
        let ctx = BoardContext::in_memory(Arc::new(ScriptedSuggestionBackend::new()));
        let result = RegisterMember::new("", "Hopper", "engineer")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(BoardError::MissingField { .. })));
    }

    #[tokio::test]
    async fn test_join_project_is_idempotent() {
        let (ctx, project) = setup().await;
        let member = RegisterMember::new("Grace", "Hopper", "engineer")
            .execute(&ctx)
            .await
            .unwrap();

        let updated = JoinProject::new(project.id, member.id, project.owner)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(updated.members, vec![member.id]);

        let updated = JoinProject::new(project.id, member.id, project.owner)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(updated.members, vec![member.id]);
    }

    #[tokio::test]
    async fn test_join_project_requires_participant_actor() {
        let (ctx, project) = setup().await;
        let member = RegisterMember::new("Grace", "Hopper", "engineer")
            .execute(&ctx)
            .await
            .unwrap();

        // A non-participant actor cannot add members, and cannot learn
        // whether the project exists.
        let result = JoinProject::new(project.id, member.id, member.id)
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(BoardError::ProjectNotFound { .. })));
    }
}
