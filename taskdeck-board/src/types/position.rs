//! Position keys for task ordering using fractional indexing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering key of a task within a column.
///
/// Positions are floats that sort ascending to determine display order. This
/// allows inserting between existing items without rewriting the positions of
/// other tasks. Keys are not required to be contiguous or globally unique;
/// ties between siblings are broken by creation time, then id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(f64);

impl Position {
    /// Base key for the first task in an empty column
    pub const BASE: Position = Position(1.0);

    /// Gap used when only one neighbor exists
    const STEP: f64 = 1.0;

    /// Minimum usable gap between neighbors; below this the allocator
    /// falls back to `prev + EPSILON` so insertion always makes progress
    /// instead of colliding.
    const EPSILON: f64 = 1e-9;

    /// Compute a key for an item dropped between `prev` and `next`.
    ///
    /// Pass the surrounding siblings in the target column, with the moving
    /// task itself already excluded. Always returns a usable key:
    ///
    /// - no neighbors: the base key
    /// - only a predecessor: one step past it
    /// - only a successor: one step before it
    /// - both: the midpoint, or `prev + EPSILON` once the midpoint
    ///   degenerates (float underflow after many same-spot inserts)
    pub fn allocate(prev: Option<Position>, next: Option<Position>) -> Position {
        match (prev, next) {
            (None, None) => Self::BASE,
            (Some(prev), None) => Position(prev.0 + Self::STEP),
            (None, Some(next)) => Position(next.0 - Self::STEP),
            (Some(prev), Some(next)) => {
                let midpoint = (prev.0 + next.0) / 2.0;
                let gap = next.0 - prev.0;
                if midpoint > prev.0 && midpoint < next.0 && gap >= Self::EPSILON {
                    Position(midpoint)
                } else {
                    Position(prev.0 + Self::EPSILON)
                }
            }
        }
    }

    /// Get the inner float value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total ordering over keys (positions are never NaN)
    pub fn total_cmp(&self, other: &Position) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Position {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}
