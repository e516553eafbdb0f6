//! BoardContext - collaborator access for board operations
//!
//! The context provides access to storage and collaborators. No business
//! logic methods, just data access primitives and small cross-cutting
//! helpers. Operations do all the work.

use crate::assign::AssignmentResolver;
use crate::authz::{Authorizer, StoreAuthorizer};
use crate::error::{BoardError, Result};
use crate::events::{BroadcastEventSink, EventSink};
use crate::store::{BoardStore, MemoryStore};
use crate::types::{BoardEvent, Candidate, MemberId, Project, ProjectId};
use std::sync::Arc;
use taskdeck_suggest::SuggestionBackend;

/// Context passed to every operation - provides access, not logic
pub struct BoardContext {
    store: Arc<dyn BoardStore>,
    events: Arc<dyn EventSink>,
    authorizer: Arc<dyn Authorizer>,
    resolver: AssignmentResolver,
}

impl BoardContext {
    /// Create a context over explicit collaborators
    pub fn new(
        store: Arc<dyn BoardStore>,
        events: Arc<dyn EventSink>,
        authorizer: Arc<dyn Authorizer>,
        suggestions: Arc<dyn SuggestionBackend>,
    ) -> Self {
        Self {
            store,
            events,
            authorizer,
            resolver: AssignmentResolver::new(suggestions),
        }
    }

    /// Create a self-contained in-memory context: memory store,
    /// membership-based authorization, broadcast events
    pub fn in_memory(suggestions: Arc<dyn SuggestionBackend>) -> Self {
        let store: Arc<dyn BoardStore> = Arc::new(MemoryStore::new());
        let authorizer = Arc::new(StoreAuthorizer::new(store.clone()));
        Self::new(
            store,
            Arc::new(BroadcastEventSink::default()),
            authorizer,
            suggestions,
        )
    }

    /// The storage backend
    pub fn store(&self) -> &dyn BoardStore {
        self.store.as_ref()
    }

    /// The assignment resolver
    pub fn resolver(&self) -> &AssignmentResolver {
        &self.resolver
    }

    /// Require `member` to be a participant of `project`.
    ///
    /// A failed check surfaces as `ProjectNotFound` - the API does not
    /// reveal whether the project exists to non-participants.
    pub async fn require_participant(
        &self,
        project: &ProjectId,
        member: &MemberId,
    ) -> Result<()> {
        if self.authorizer.is_participant(project, member).await? {
            Ok(())
        } else {
            Err(BoardError::ProjectNotFound {
                id: project.to_string(),
            })
        }
    }

    /// Assignment candidates for a project: owner first, then roster order,
    /// each with current workload counts from the store.
    ///
    /// Roster entries whose member record no longer resolves (deleted
    /// externally) are skipped, so the pool can be empty.
    pub async fn assignment_candidates(&self, project: &Project) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for id in project.participants() {
            let member = match self.store.member(&id).await {
                Ok(member) => member,
                Err(err) if err.is_not_found() => continue,
                Err(err) => return Err(err),
            };
            let in_progress = self.store.in_progress_count(&project.id, &id).await?;
            let completed = self.store.completed_count(&project.id, &id).await?;
            candidates.push(Candidate::new(&member, in_progress, completed));
        }
        Ok(candidates)
    }

    /// Generate an unused human key for a project by probing
    /// `"{key}-{n}"` for increasing `n`.
    pub async fn allocate_task_key(&self, project: &Project) -> Result<String> {
        let mut n: u64 = 1;
        loop {
            let key = format!("{}-{}", project.key, n);
            if !self.store.task_key_exists(&project.id, &key).await? {
                return Ok(key);
            }
            n += 1;
        }
    }

    /// Publish an event on the project topic, logging and swallowing any
    /// failure - the event channel is a secondary concern and must never
    /// fail the mutation that produced the event.
    pub async fn publish(&self, project: &ProjectId, event: BoardEvent) {
        let topic = BoardEvent::topic(project);
        if let Err(err) = self.events.publish(&topic, &event).await {
            tracing::warn!("dropping {} event on {}: {}", event.name(), topic, err);
        }
    }
}
