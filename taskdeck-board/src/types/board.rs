//! Board-level types: Project, Column, Member, Candidate

use super::ids::{ColumnId, MemberId, ProjectId};
use serde::{Deserialize, Serialize};

/// A project owning columns, tasks and a member roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Human-key prefix, e.g. `ACME` for tasks `ACME-1`, `ACME-2`, ...
    pub key: String,
    pub name: String,
    pub owner: MemberId,
    /// Members beyond the owner; order is stable and meaningful (assignment
    /// tie-breaks walk owner first, then this list in order)
    #[serde(default)]
    pub members: Vec<MemberId>,
}

impl Project {
    /// Create a new project
    pub fn new(key: impl Into<String>, name: impl Into<String>, owner: MemberId) -> Self {
        Self {
            id: ProjectId::new(),
            key: key.into(),
            name: name.into(),
            owner,
            members: Vec::new(),
        }
    }

    /// All participants: owner first, then members in roster order,
    /// deduplicated
    pub fn participants(&self) -> Vec<MemberId> {
        let mut ids = vec![self.owner];
        for member in &self.members {
            if !ids.contains(member) {
                ids.push(*member);
            }
        }
        ids
    }

    /// Check whether a member participates in this project
    pub fn is_participant(&self, member: &MemberId) -> bool {
        self.owner == *member || self.members.contains(member)
    }
}

/// A column defines a workflow stage
///
/// The display name is free text chosen by the project owner and is the only
/// signal used to infer what status tasks entering the column should carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub project: ProjectId,
    pub name: String,
    /// Marks the canonical "done" column for the project
    #[serde(default)]
    pub is_default: bool,
    /// Display order of the column on the board
    pub order: usize,
}

impl Column {
    /// Create a new column
    pub fn new(project: ProjectId, name: impl Into<String>, order: usize) -> Self {
        Self {
            id: ColumnId::new(),
            project,
            name: name.into(),
            is_default: false,
            order,
        }
    }

    /// Mark as the project's canonical done column
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// A team member that can be assigned to tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Member {
    /// Create a new member
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }

    /// Display name used for suggestion matching: `"{first} {last}"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A member projected into an assignment decision
///
/// Carries the derived workload counts so the resolver stays a pure function
/// of its inputs.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: MemberId,
    pub full_name: String,
    pub role: String,
    /// Current IN_PROGRESS task count within the project
    pub in_progress: usize,
    /// Historical DONE count, forwarded to the suggestion service as context
    pub completed: usize,
}

impl Candidate {
    /// Build a candidate from a member plus workload counts
    pub fn new(member: &Member, in_progress: usize, completed: usize) -> Self {
        Self {
            id: member.id,
            full_name: member.full_name(),
            role: member.role.clone(),
            in_progress,
            completed,
        }
    }
}
