//! Storage boundary for the board engine
//!
//! The store provides access, not logic: point lookups, one ordered range
//! query, atomic single-row writes and two aggregate counts. Operations do
//! all the work. The persistent relational store behind a deployment is a
//! drop-in implementation of this trait; `MemoryStore` is the reference
//! implementation used by tests and embedded callers.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{Column, ColumnId, Member, MemberId, Project, ProjectId, Task, TaskId};
use async_trait::async_trait;

/// Storage primitives for board entities
///
/// Every read is a snapshot: two concurrent mutations each compute from
/// their own `tasks_in_column` read and write independently. The store is
/// the only synchronization point in the engine.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Look up a project
    async fn project(&self, id: &ProjectId) -> Result<Project>;

    /// Insert or update a project
    async fn upsert_project(&self, project: &Project) -> Result<()>;

    /// Check whether a project human-key prefix is already taken
    async fn project_key_exists(&self, key: &str) -> Result<bool>;

    /// Look up a column
    async fn column(&self, id: &ColumnId) -> Result<Column>;

    /// All columns of a project, sorted by display order
    async fn columns_in_project(&self, project: &ProjectId) -> Result<Vec<Column>>;

    /// Insert or update a column
    async fn upsert_column(&self, column: &Column) -> Result<()>;

    /// Look up a member
    async fn member(&self, id: &MemberId) -> Result<Member>;

    /// Insert or update a member
    async fn upsert_member(&self, member: &Member) -> Result<()>;

    /// Look up a task
    async fn task(&self, id: &TaskId) -> Result<Task>;

    /// Insert or update a task (one atomic write)
    async fn upsert_task(&self, task: &Task) -> Result<()>;

    /// Snapshot of a column's tasks ordered by position ascending, ties
    /// broken by creation time then id
    async fn tasks_in_column(&self, column: &ColumnId) -> Result<Vec<Task>>;

    /// Check whether a task human key is already taken within a project
    async fn task_key_exists(&self, project: &ProjectId, key: &str) -> Result<bool>;

    /// Count of a member's IN_PROGRESS tasks within a project
    async fn in_progress_count(&self, project: &ProjectId, member: &MemberId) -> Result<usize>;

    /// Count of a member's DONE tasks within a project
    async fn completed_count(&self, project: &ProjectId, member: &MemberId) -> Result<usize>;
}
