//! Task types: Task, Status, Priority

use super::ids::{ColumnId, MemberId, ProjectId, TaskId};
use super::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Stable wire name, e.g. `IN_PROGRESS`
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::InProgress => "IN_PROGRESS",
            Status::Done => "DONE",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Status::Todo),
            "IN_PROGRESS" => Ok(Status::InProgress),
            "DONE" => Ok(Status::Done),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// Priority of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "URGENT" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// A task/card on a board
///
/// Invariant: `status == Done` iff `completed_at` is set. Mutations go
/// through `apply_status` so the pair can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Human key, `"{project_key}-{n}"`, unique per store
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Ordering key within the column
    pub position: Position,
    pub column: ColumnId,
    pub project: ProjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<MemberId>,
    pub created_by: MemberId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task in the given column
    pub fn new(
        title: impl Into<String>,
        key: impl Into<String>,
        project: ProjectId,
        column: ColumnId,
        position: Position,
        created_by: MemberId,
    ) -> Self {
        Self {
            id: TaskId::new(),
            key: key.into(),
            title: title.into(),
            description: None,
            status: Status::Todo,
            priority: Priority::default(),
            position,
            column,
            project,
            assignee: None,
            created_by,
            completed_at: None,
            created_at: Utc::now(),
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

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Transition to `status`, keeping the completion timestamp in sync.
    ///
    /// Entering `Done` stamps `completed_at` (preserving an existing stamp
    /// when the task was already done); leaving `Done` clears it.
    pub fn apply_status(&mut self, status: Status) {
        if status == Status::Done {
            if self.completed_at.is_none() {
                self.completed_at = Some(Utc::now());
            }
        } else {
            self.completed_at = None;
        }
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task::new(
            "Test task",
            "TEST-1",
            ProjectId::new(),
            ColumnId::new(),
            Position::BASE,
            MemberId::new(),
        )
    }

    #[test]
    fn test_new_task_defaults() {
        let task = sample_task();
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.assignee.is_none());
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_apply_status_sets_and_clears_completion() {
        let mut task = sample_task();

        task.apply_status(Status::Done);
        assert_eq!(task.status, Status::Done);
        let stamp = task.completed_at.expect("done task must have a stamp");

        // Re-entering Done keeps the original stamp
        task.apply_status(Status::Done);
        assert_eq!(task.completed_at, Some(stamp));

        // Backward transition clears it
        task.apply_status(Status::InProgress);
        assert_eq!(task.status, Status::InProgress);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(Status::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!("DONE".parse::<Status>().unwrap(), Status::Done);
        assert!("doing".parse::<Status>().is_err());
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("URGENT".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("CRITICAL".parse::<Priority>().is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let task = sample_task().with_description("Details");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"status\":\"TODO\""));
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, task.title);
        assert_eq!(parsed.key, "TEST-1");
    }
}
