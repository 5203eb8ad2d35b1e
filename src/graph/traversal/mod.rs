//! Reachability search over an [`AdjacencyGraph`].
//!
//! Two interchangeable strategies answer "can `target` be reached from
//! `start`?": [`BreadthFirst`] expands vertices level by level from a FIFO
//! queue, [`DepthFirst`] follows neighbor order as deep as it can from an
//! explicit LIFO stack. They visit vertices in different orders but always
//! agree on the yes/no answer when no depth limit is set.
//!
//! All traversal state (visited set, queue or stack, parent pointers) lives in
//! the call and is dropped on return. Searches take `&AdjacencyGraph`, so any
//! number may run at once while the borrow checker keeps mutation out.
//!
//! Unknown start or target vertices are not errors; the search simply reports
//! `found == false`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::{AdjacencyGraph, VertexId};

mod bfs;
mod dfs;

pub use bfs::{bfs_levels, Bfs, BreadthFirst};
pub use dfs::{Dfs, DepthFirst};

/// A reachability search strategy.
pub trait Strategy<V: VertexId> {
    /// Human-readable strategy name, used in logs.
    fn name(&self) -> &'static str;

    /// Searches for `target` starting at `start`.
    fn search(
        &self,
        graph: &AdjacencyGraph<V>,
        start: &V,
        target: &V,
        config: &SearchConfig,
    ) -> SearchOutcome<V>;
}

/// Knobs for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Vertices this many edges from `start` (along the traversal tree) are
    /// examined but not expanded. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Sets the depth limit (builder pattern).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[inline]
    pub(crate) fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth < limit)
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<V> {
    /// Whether the target was reached.
    pub found: bool,
    /// Vertices in the order the strategy examined them, ending with the
    /// target on success.
    pub visit_order: Vec<V>,
    /// `start ..= target` along the traversal tree, present on success.
    pub path: Option<Vec<V>>,
}

impl<V> SearchOutcome<V> {
    /// Number of edges on the reported path, if the target was found.
    pub fn depth(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }

    /// Number of vertices examined before the search stopped.
    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }

    pub(crate) fn not_found(visit_order: Vec<V>) -> Self {
        Self {
            found: false,
            visit_order,
            path: None,
        }
    }
}

impl<V: VertexId> SearchOutcome<V> {
    pub(crate) fn reached(
        visit_order: Vec<V>,
        parents: &HashMap<V, V>,
        start: &V,
        target: &V,
    ) -> Self {
        Self {
            found: true,
            visit_order,
            path: Some(reconstruct_path(parents, start, target)),
        }
    }
}

/// Runtime-selectable strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalKind {
    /// FIFO, level by level.
    BreadthFirst,
    /// LIFO, neighbor order first.
    DepthFirst,
}

impl TraversalKind {
    /// Both strategies, breadth-first first.
    pub const ALL: [TraversalKind; 2] = [TraversalKind::BreadthFirst, TraversalKind::DepthFirst];

    /// Runs the selected strategy.
    pub fn search<V: VertexId>(
        self,
        graph: &AdjacencyGraph<V>,
        start: &V,
        target: &V,
        config: &SearchConfig,
    ) -> SearchOutcome<V> {
        match self {
            TraversalKind::BreadthFirst => BreadthFirst.search(graph, start, target, config),
            TraversalKind::DepthFirst => DepthFirst.search(graph, start, target, config),
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalKind::BreadthFirst => "breadth-first",
            TraversalKind::DepthFirst => "depth-first",
        })
    }
}

impl FromStr for TraversalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(TraversalKind::BreadthFirst),
            "dfs" | "depth-first" => Ok(TraversalKind::DepthFirst),
            other => Err(format!("unknown traversal strategy: {other}")),
        }
    }
}

/// Breadth-first search with no depth limit.
pub fn bfs_search<V: VertexId>(
    graph: &AdjacencyGraph<V>,
    start: &V,
    target: &V,
) -> SearchOutcome<V> {
    BreadthFirst.search(graph, start, target, &SearchConfig::default())
}

/// Depth-first search with no depth limit.
pub fn dfs_search<V: VertexId>(
    graph: &AdjacencyGraph<V>,
    start: &V,
    target: &V,
) -> SearchOutcome<V> {
    DepthFirst.search(graph, start, target, &SearchConfig::default())
}

/// Returns `true` if a path of edges connects `start` to `target`.
pub fn is_reachable<V: VertexId>(graph: &AdjacencyGraph<V>, start: &V, target: &V) -> bool {
    bfs_search(graph, start, target).found
}

/// Runs one independent search per target in parallel.
///
/// Outcomes are returned in `targets` order.
#[cfg(feature = "parallel")]
pub fn search_many<V>(
    graph: &AdjacencyGraph<V>,
    kind: TraversalKind,
    start: &V,
    targets: &[V],
    config: &SearchConfig,
) -> Vec<SearchOutcome<V>>
where
    V: VertexId + Send + Sync,
{
    use rayon::prelude::*;

    targets
        .par_iter()
        .map(|target| kind.search(graph, start, target, config))
        .collect()
}

/// A start vertex the graph does not know can only "reach" itself.
#[inline]
pub(crate) fn start_is_dead<V: VertexId>(
    graph: &AdjacencyGraph<V>,
    start: &V,
    target: &V,
) -> bool {
    start != target && !graph.contains_vertex(start)
}

pub(crate) fn log_outcome<V>(strategy: &'static str, outcome: &SearchOutcome<V>) {
    debug!(
        strategy,
        found = outcome.found,
        visited = outcome.visited_count(),
        depth = ?outcome.depth(),
        "search finished"
    );
}

fn reconstruct_path<V: VertexId>(parents: &HashMap<V, V>, start: &V, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_kind_parses_short_and_long_names() {
        assert_eq!("bfs".parse::<TraversalKind>(), Ok(TraversalKind::BreadthFirst));
        assert_eq!(
            "Depth-First".parse::<TraversalKind>(),
            Ok(TraversalKind::DepthFirst)
        );
        assert!("dijkstra".parse::<TraversalKind>().is_err());
        assert_eq!(TraversalKind::BreadthFirst.to_string(), "breadth-first");
    }

    #[test]
    fn traversal_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&TraversalKind::DepthFirst).unwrap();
        assert_eq!(json, r#""depth-first""#);
    }

    #[test]
    fn search_config_depth_gate() {
        let unbounded = SearchConfig::default();
        assert!(unbounded.expands(usize::MAX - 1));

        let limited = SearchConfig::default().with_max_depth(2);
        assert!(limited.expands(1));
        assert!(!limited.expands(2));
    }

    #[test]
    fn reconstruct_path_follows_parents() {
        let parents: HashMap<i32, i32> = [(2, 1), (5, 2), (6, 5)].into_iter().collect();
        assert_eq!(reconstruct_path(&parents, &1, &6), vec![1, 2, 5, 6]);
        assert_eq!(reconstruct_path(&parents, &1, &1), vec![1]);
    }

    #[test]
    fn outcome_depth_counts_edges() {
        let outcome = SearchOutcome {
            found: true,
            visit_order: vec![1, 3, 6],
            path: Some(vec![1, 3, 6]),
        };
        assert_eq!(outcome.depth(), Some(2));
        assert_eq!(outcome.visited_count(), 3);
        assert_eq!(SearchOutcome::<i32>::not_found(Vec::new()).depth(), None);
    }
}
