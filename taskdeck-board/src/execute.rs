//! The `Execute` trait for board operations
//!
//! Operations are structs where the fields ARE the parameters - no
//! duplication. Each operation implements `Execute` against the context it
//! needs and returns its typed output (usually the full persisted `Task`).

use async_trait::async_trait;

/// Trait for executable operations
///
/// `C` is the context type giving access to storage and collaborators, `E`
/// the operation's error type.
#[async_trait]
pub trait Execute<C, E> {
    /// What a successful execution returns
    type Output;

    /// Run the operation against the given context
    async fn execute(&self, ctx: &C) -> Result<Self::Output, E>;
}
