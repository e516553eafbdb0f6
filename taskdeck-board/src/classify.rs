//! Column name classification
//!
//! Columns have no machine-readable type field; the display name is the only
//! signal for what status tasks entering the column should carry. Keyword
//! sets are checked in priority order DONE, then IN_PROGRESS, then TODO, so
//! a label like "Done & Archived" can never match a "doing" heuristic.
//! Anything unrecognized is `Unknown`, and callers leave the task's existing
//! status untouched rather than guessing.

use crate::types::Status;

/// Inferred meaning of a column's display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Done,
    InProgress,
    Todo,
    /// No keyword matched; status must not be changed
    Unknown,
}

impl ColumnKind {
    /// The status implied by this classification, if any
    pub fn implied_status(&self) -> Option<Status> {
        match self {
            ColumnKind::Done => Some(Status::Done),
            ColumnKind::InProgress => Some(Status::InProgress),
            ColumnKind::Todo => Some(Status::Todo),
            ColumnKind::Unknown => None,
        }
    }
}

const DONE_KEYWORDS: &[&str] = &["done", "complete", "completed", "finished", "closed"];
const IN_PROGRESS_KEYWORDS: &[&str] = &["progress", "doing", "active", "working"];
const IN_PROGRESS_NORMALIZED: &[&str] = &["inprogress", "wip"];
const TODO_KEYWORDS: &[&str] = &["to do", "todo", "backlog", "queue", "planned"];

/// Classify a column display name into a lifecycle meaning.
///
/// Matching is substring-based on the lower-cased name; the IN_PROGRESS set
/// additionally checks a whitespace/hyphen-stripped variant so "w-i-p" and
/// "In Progress" both land correctly.
pub fn classify(name: &str) -> ColumnKind {
    let lower = name.to_lowercase();
    let stripped: String = lower
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if DONE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ColumnKind::Done;
    }
    if IN_PROGRESS_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || IN_PROGRESS_NORMALIZED.iter().any(|kw| stripped.contains(kw))
    {
        return ColumnKind::InProgress;
    }
    if TODO_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return ColumnKind::Todo;
    }
    ColumnKind::Unknown
}
