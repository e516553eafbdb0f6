//! Error types for the board engine

use taskdeck_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
///
/// Variants carry enough detail to render a user-facing message (kind plus
/// offending field), never storage-layer detail.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Project not found, or the caller is not a participant
    #[error("project not found: {id}")]
    ProjectNotFound { id: String },

    /// Member not found
    #[error("member not found: {id}")]
    MemberNotFound { id: String },

    /// Missing required field
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Duplicate identifier or key
    #[error("duplicate {item_type}: {id}")]
    Duplicate { item_type: String, id: String },

    /// Automatic assignment was requested but there is nobody to assign
    #[error("cannot determine an assignee for project {project}: no candidates")]
    AssignmentIndeterminate { project: String },

    /// The underlying store rejected the operation
    #[error("persistence failure: {message}")]
    Persistence { message: String },
}

impl BoardError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate error
    pub fn duplicate(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Duplicate {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Check if this is a not-found error (including authorization failures,
    /// which are deliberately indistinguishable)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::ProjectNotFound { .. }
                | Self::MemberNotFound { .. }
        )
    }
}

impl Severity for BoardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BoardError::Persistence { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::TaskNotFound { id: "abc123".into() };
        assert_eq!(err.to_string(), "task not found: abc123");

        let err = BoardError::invalid_value("priority", "unknown priority: CRITICAL");
        assert!(err.to_string().contains("priority"));
    }

    #[test]
    fn test_not_found_classification() {
        assert!(BoardError::ProjectNotFound { id: "x".into() }.is_not_found());
        assert!(!BoardError::missing_field("title").is_not_found());
    }

    #[test]
    fn test_severity() {
        assert_eq!(
            BoardError::persistence("write rejected").severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            BoardError::missing_field("title").severity(),
            ErrorSeverity::Error
        );
    }
}
