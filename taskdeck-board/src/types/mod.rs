//! Core types for the board engine

mod board;
mod event;
mod ids;
mod position;
mod task;

// Re-export all types
pub use board::{Candidate, Column, Member, Project};
pub use event::BoardEvent;
pub use ids::{ColumnId, MemberId, ProjectId, TaskId};
pub use position::Position;
pub use task::{Priority, Status, Task};
