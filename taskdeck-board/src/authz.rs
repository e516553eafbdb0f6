//! Authorization boundary
//!
//! The engine's only access rule: a caller must be a participant of the
//! project it mutates. Session issuance and identity live elsewhere; this
//! trait is consulted before any mutation.

use crate::error::Result;
use crate::store::BoardStore;
use crate::types::{MemberId, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait answering the single authorization question of the engine
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Is `member` a participant (owner or roster member) of `project`?
    async fn is_participant(&self, project: &ProjectId, member: &MemberId) -> Result<bool>;
}

/// Authorizer that answers from project membership in the store
pub struct StoreAuthorizer {
    store: Arc<dyn BoardStore>,
}

impl StoreAuthorizer {
    /// Create an authorizer over the given store
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Authorizer for StoreAuthorizer {
    async fn is_participant(&self, project: &ProjectId, member: &MemberId) -> Result<bool> {
        let project = match self.store.project(project).await {
            Ok(project) => project,
            Err(err) if err.is_not_found() => return Ok(false),
            Err(err) => return Err(err),
        };
        Ok(project.is_participant(member))
    }
}
