//! Domain events published after board mutations
//!
//! Events drive real-time UI refresh and are a secondary concern: publishing
//! is fire-and-forget, and a failed publish never fails the mutation that
//! produced it.

use super::ids::{ColumnId, ProjectId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// One domain event, scoped to a project topic
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BoardEvent {
    /// A task was created
    TaskCreated {
        task: Task,
    },

    /// A task was moved between or within columns
    TaskMoved {
        task: Task,
        from: ColumnId,
        to: ColumnId,
    },
}

impl BoardEvent {
    /// Create a task-created event
    pub fn task_created(task: Task) -> Self {
        Self::TaskCreated { task }
    }

    /// Create a task-moved event
    pub fn task_moved(task: Task, from: ColumnId, to: ColumnId) -> Self {
        Self::TaskMoved { task, from, to }
    }

    /// Wire name of the event, e.g. `task-moved`
    pub fn name(&self) -> &'static str {
        match self {
            BoardEvent::TaskCreated { .. } => "task-created",
            BoardEvent::TaskMoved { .. } => "task-moved",
        }
    }

    /// Topic for a project's event stream
    pub fn topic(project: &ProjectId) -> String {
        format!("project:{}", project)
    }
}
