//! Visited-vertex tracking for a single traversal call.
//!
//! Vertices are arbitrary hashable keys, so the set is hash-based instead of a
//! dense bitset. A `VisitedSet` is created per search and dropped on return;
//! it is never shared between searches.

use std::collections::HashSet;
use std::hash::Hash;

/// The set of vertices already reached by one traversal.
pub(crate) struct VisitedSet<V> {
    seen: HashSet<V>,
}

impl<V: Eq + Hash + Clone> VisitedSet<V> {
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &V) -> bool {
        if self.seen.contains(vertex) {
            return false;
        }
        self.seen.insert(vertex.clone())
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }
}
