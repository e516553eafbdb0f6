//! Assignee resolution
//!
//! The suggestion service returns free text, not an identifier; it is
//! advisory and untrusted. Resolution is a two-phase pipeline: ask once,
//! then translate the reply into a real member id by name matching, and if
//! that fails for any reason fall back to the deterministic workload
//! heuristic. The fallback makes the whole operation useful, testable and
//! offline-reproducible with the suggestion service stubbed out entirely.

use crate::types::{Candidate, MemberId};
use std::sync::Arc;
use taskdeck_suggest::{CandidateSummary, SuggestRequest, SuggestionBackend};

/// Resolves which member receives a task when automatic assignment is
/// requested
pub struct AssignmentResolver {
    backend: Arc<dyn SuggestionBackend>,
}

impl AssignmentResolver {
    /// Create a resolver over the given suggestion backend
    pub fn new(backend: Arc<dyn SuggestionBackend>) -> Self {
        Self { backend }
    }

    /// Pick an assignee from the candidate pool.
    ///
    /// Returns `None` only for an empty pool; the caller decides that
    /// policy. The suggestion backend is consulted exactly once; every
    /// backend failure or unmatchable reply falls through to the workload
    /// fallback.
    pub async fn resolve(
        &self,
        title: &str,
        description: Option<&str>,
        candidates: &[Candidate],
    ) -> Option<MemberId> {
        if candidates.is_empty() {
            return None;
        }

        let mut request = SuggestRequest::new(
            title,
            candidates
                .iter()
                .map(|c| CandidateSummary {
                    name: c.full_name.clone(),
                    role: c.role.clone(),
                    completed: c.completed,
                })
                .collect(),
        );
        if let Some(description) = description {
            request = request.with_description(description);
        }

        match self.backend.suggest(&request).await {
            Ok(reply) => {
                if let Some(id) = match_suggested_name(&reply, candidates) {
                    return Some(id);
                }
                tracing::debug!("suggestion {:?} matched no candidate", reply.trim());
            }
            Err(err) => {
                tracing::debug!("suggestion backend unavailable: {}", err);
            }
        }

        Some(least_loaded(candidates))
    }
}

/// Translate a free-text suggestion into a candidate id.
///
/// Case-insensitive containment, checked both ways: a bare "ada" matches
/// "Ada Lovelace", and a full sentence containing the name matches too.
/// First matching candidate wins.
fn match_suggested_name(reply: &str, candidates: &[Candidate]) -> Option<MemberId> {
    let suggested = reply.trim().to_lowercase();
    if suggested.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|c| {
            let name = c.full_name.to_lowercase();
            name.contains(&suggested) || suggested.contains(&name)
        })
        .map(|c| c.id)
}

/// Workload fallback: the candidate with the strictly lowest in-progress
/// count, ties broken by pool order (first encountered wins). Candidate
/// order is stable query output, so this is deterministic.
fn least_loaded(candidates: &[Candidate]) -> MemberId {
    debug_assert!(!candidates.is_empty());
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.in_progress < best.in_progress {
            best = candidate;
        }
    }
    best.id
}
