//! Board engine: task ordering, column classification and assignee resolution
//!
//! This crate implements the mutation core of a kanban-style tracker:
//!
//! - **Fractional ordering** - tasks within a column carry float position
//!   keys; dropping between two neighbors allocates a midpoint without
//!   rewriting siblings, and concurrent same-slot drops degrade to a
//!   secondary-key tie-break instead of corrupting order.
//! - **Status from column names** - columns have no machine-readable type;
//!   a task's lifecycle status is inferred from the free-text name of the
//!   column it is dropped into, with an explicit UNKNOWN escape hatch that
//!   leaves status untouched rather than guessing.
//! - **Assignee resolution** - an advisory LLM suggestion is translated
//!   into a real member id by name matching, with a deterministic
//!   lowest-workload fallback whenever the suggestion service fails or
//!   returns garbage.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskdeck_board::project::{InitProject, RegisterMember};
//! use taskdeck_board::store::BoardStore;
//! use taskdeck_board::task::{CreateTask, MoveTask};
//! use taskdeck_board::{BoardContext, Execute};
//! use taskdeck_suggest::HttpSuggestionBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::in_memory(Arc::new(HttpSuggestionBackend::from_env()?));
//!
//! let owner = RegisterMember::new("Ada", "Lovelace", "owner")
//!     .execute(&ctx).await?;
//! let project = InitProject::new("ACME", "Acme Rockets", owner.id)
//!     .execute(&ctx).await?;
//! let columns = ctx.store().columns_in_project(&project.id).await?;
//!
//! let task = CreateTask::new("Design fins", project.id, columns[0].id, owner.id)
//!     .with_auto_assign()
//!     .execute(&ctx).await?;
//!
//! MoveTask::new(task.id, columns[1].id, owner.id).execute(&ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Operations are structs implementing [`Execute`] against a
//! [`BoardContext`]; the context provides access to the store, event sink,
//! authorizer and assignment resolver, and the operations do all the work.

mod assign;
mod authz;
mod classify;
mod context;
mod error;
mod events;
mod execute;
pub mod store;
pub mod types;

// Operation modules
pub mod column;
pub mod project;
pub mod task;

pub use assign::AssignmentResolver;
pub use authz::{Authorizer, StoreAuthorizer};
pub use classify::{classify, ColumnKind};
pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use events::{BroadcastEventSink, EventError, EventSink};
pub use execute::Execute;

// Re-export commonly used types
pub use types::{
    BoardEvent, Candidate, Column, ColumnId, Member, MemberId, Position, Priority, Project,
    ProjectId, Status, Task, TaskId,
};
