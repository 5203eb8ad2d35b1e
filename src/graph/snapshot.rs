//! Serializable graph snapshots.

use serde::{Deserialize, Serialize};

/// A graph flattened to its vertex and edge lists.
///
/// `vertices` carries isolated vertices that no edge mentions. Edges are
/// undirected; listing both `(u, v)` and `(v, u)` is harmless because loading
/// goes through [`AdjacencyGraph::add_edge`](crate::AdjacencyGraph::add_edge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    /// Every vertex, in no particular order.
    #[serde(default)]
    pub vertices: Vec<V>,
    /// Every undirected edge.
    #[serde(default)]
    pub edges: Vec<(V, V)>,
}

impl<V> Default for GraphSnapshot<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}
