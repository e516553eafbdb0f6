//! In-memory reference implementation of `BoardStore`

use super::BoardStore;
use crate::error::{BoardError, Result};
use crate::types::{Column, ColumnId, Member, MemberId, Project, ProjectId, Status, Task, TaskId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Map-backed store used by tests and embedded callers
///
/// Each method takes the lock once, so every read is a consistent snapshot
/// and every write is atomic, matching the guarantees a relational
/// implementation provides per statement.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    projects: HashMap<ProjectId, Project>,
    columns: HashMap<ColumnId, Column>,
    members: HashMap<MemberId, Member>,
    tasks: HashMap<TaskId, Task>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn project(&self, id: &ProjectId) -> Result<Project> {
        self.inner
            .read()
            .await
            .projects
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::ProjectNotFound { id: id.to_string() })
    }

    async fn upsert_project(&self, project: &Project) -> Result<()> {
        self.inner
            .write()
            .await
            .projects
            .insert(project.id, project.clone());
        Ok(())
    }

    async fn project_key_exists(&self, key: &str) -> Result<bool> {
        Ok(self
            .inner
            .read()
            .await
            .projects
            .values()
            .any(|p| p.key == key))
    }

    async fn column(&self, id: &ColumnId) -> Result<Column> {
        self.inner
            .read()
            .await
            .columns
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })
    }

    async fn columns_in_project(&self, project: &ProjectId) -> Result<Vec<Column>> {
        let mut columns: Vec<Column> = self
            .inner
            .read()
            .await
            .columns
            .values()
            .filter(|c| c.project == *project)
            .cloned()
            .collect();
        columns.sort_by_key(|c| c.order);
        Ok(columns)
    }

    async fn upsert_column(&self, column: &Column) -> Result<()> {
        self.inner
            .write()
            .await
            .columns
            .insert(column.id, column.clone());
        Ok(())
    }

    async fn member(&self, id: &MemberId) -> Result<Member> {
        self.inner
            .read()
            .await
            .members
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::MemberNotFound { id: id.to_string() })
    }

    async fn upsert_member(&self, member: &Member) -> Result<()> {
        self.inner
            .write()
            .await
            .members
            .insert(member.id, member.clone());
        Ok(())
    }

    async fn task(&self, id: &TaskId) -> Result<Task> {
        self.inner
            .read()
            .await
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })
    }

    async fn upsert_task(&self, task: &Task) -> Result<()> {
        self.inner.write().await.tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn tasks_in_column(&self, column: &ColumnId) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .inner
            .read()
            .await
            .tasks
            .values()
            .filter(|t| t.column == *column)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            a.position
                .total_cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(tasks)
    }

    async fn task_key_exists(&self, project: &ProjectId, key: &str) -> Result<bool> {
        Ok(self
            .inner
            .read()
            .await
            .tasks
            .values()
            .any(|t| t.project == *project && t.key == key))
    }

    async fn in_progress_count(&self, project: &ProjectId, member: &MemberId) -> Result<usize> {
        Ok(self
            .inner
            .read()
            .await
            .tasks
            .values()
            .filter(|t| {
                t.project == *project
                    && t.status == Status::InProgress
                    && t.assignee.as_ref() == Some(member)
            })
            .count())
    }

    async fn completed_count(&self, project: &ProjectId, member: &MemberId) -> Result<usize> {
        Ok(self
            .inner
            .read()
            .await
            .tasks
            .values()
            .filter(|t| {
                t.project == *project
                    && t.status == Status::Done
                    && t.assignee.as_ref() == Some(member)
            })
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn task_at(project: ProjectId, column: ColumnId, key: &str, position: f64) -> Task {
        Task::new(
            key,
            key,
            project,
            column,
            Position::from(position),
            MemberId::new(),
        )
    }

    #[tokio::test]
    async fn test_missing_lookups_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.task(&TaskId::new()).await,
            Err(BoardError::TaskNotFound { .. })
        ));
        assert!(matches!(
            store.project(&ProjectId::new()).await,
            Err(BoardError::ProjectNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_tasks_in_column_sorted_by_position() {
        let store = MemoryStore::new();
        let project = ProjectId::new();
        let column = ColumnId::new();

        store
            .upsert_task(&task_at(project, column, "T-2", 2.0))
            .await
            .unwrap();
        store
            .upsert_task(&task_at(project, column, "T-1", 1.0))
            .await
            .unwrap();
        store
            .upsert_task(&task_at(project, column, "T-3", 1.5))
            .await
            .unwrap();

        let keys: Vec<String> = store
            .tasks_in_column(&column)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["T-1", "T-3", "T-2"]);
    }

    #[tokio::test]
    async fn test_position_ties_break_by_creation_order() {
        let store = MemoryStore::new();
        let project = ProjectId::new();
        let column = ColumnId::new();

        // Two concurrent drops landing on the same key - the accepted race.
        let first = task_at(project, column, "T-1", 1.5);
        let second = task_at(project, column, "T-2", 1.5);
        store.upsert_task(&first).await.unwrap();
        store.upsert_task(&second).await.unwrap();

        let keys: Vec<String> = store
            .tasks_in_column(&column)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(keys, vec!["T-1", "T-2"]);
    }

    #[tokio::test]
    async fn test_workload_counts() {
        let store = MemoryStore::new();
        let project = ProjectId::new();
        let column = ColumnId::new();
        let member = MemberId::new();

        let mut active = task_at(project, column, "T-1", 1.0).with_assignee(member);
        active.apply_status(Status::InProgress);
        store.upsert_task(&active).await.unwrap();

        let mut done = task_at(project, column, "T-2", 2.0).with_assignee(member);
        done.apply_status(Status::Done);
        store.upsert_task(&done).await.unwrap();

        // Unassigned task must count for nobody
        store
            .upsert_task(&task_at(project, column, "T-3", 3.0))
            .await
            .unwrap();

        assert_eq!(store.in_progress_count(&project, &member).await.unwrap(), 1);
        assert_eq!(store.completed_count(&project, &member).await.unwrap(), 1);
        assert_eq!(
            store
                .in_progress_count(&project, &MemberId::new())
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_task_key_exists_is_per_project() {
        let store = MemoryStore::new();
        let project = ProjectId::new();
        let other = ProjectId::new();
        let column = ColumnId::new();

        store
            .upsert_task(&task_at(project, column, "ACME-1", 1.0))
            .await
            .unwrap();

        assert!(store.task_key_exists(&project, "ACME-1").await.unwrap());
        assert!(!store.task_key_exists(&other, "ACME-1").await.unwrap());
        assert!(!store.task_key_exists(&project, "ACME-2").await.unwrap());
    }
}
