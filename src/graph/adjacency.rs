//! A dynamic, undirected adjacency-list graph.
//!
//! Every vertex maps to the ordered list of its neighbors. Edges are stored on
//! both endpoints, and every mutation keeps the two halves in step:
//! `v` is in `u`'s list iff `u` is in `v`'s list.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) expected | Hash map insertion |
//! | `add_edge` | \(O(\deg u + \deg v)\) | Checks for existence first |
//! | `has_edge` | \(O(\deg u)\) | Linear scan of `u`'s list |
//! | `remove_edge` | \(O(\deg u + \deg v)\) | Linear scan of both lists |
//! | `remove_vertex` | \(O(\sum_{w \in N(v)} \deg w)\) | Only touches `v`'s neighbors |
//! | `neighbors` | \(O(1)\) expected | Borrowed slice |
//! | `len` | \(O(1)\) | |

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::snapshot::GraphSnapshot;
use crate::graph::traversal::{self, Bfs, Dfs};
use crate::graph::VertexId;

/// An undirected graph stored as adjacency lists.
///
/// Neighbor lists keep insertion order and never contain the same vertex twice.
/// Vertices referenced by [`add_edge`](Self::add_edge) are created on demand, and
/// removing every edge of a vertex leaves it in place with degree zero.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

// Neighbor order is part of the value: two graphs are equal only if every
// vertex has the same neighbors in the same order.
impl<V: VertexId> PartialEq for AdjacencyGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: VertexId> Eq for AdjacencyGraph<V> {}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V: VertexId> AdjacencyGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a graph from undirected edges, creating endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Adds `vertex` with an empty neighbor list.
    ///
    /// Returns `false` (and leaves the graph untouched) if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        trace!(?vertex, "vertex added");
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds the undirected edge `u - v`, creating either endpoint if absent.
    ///
    /// Each half-edge is appended only if missing, so repeating the call is a
    /// no-op. A self-loop `v - v` is stored once in `v`'s list.
    ///
    /// Returns `true` if any half-edge was inserted.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let mut inserted = false;
        if !self.has_edge(&u, &v) {
            self.list_mut(&u).push(v.clone());
            inserted = true;
        }
        if !self.has_edge(&v, &u) {
            self.list_mut(&v).push(u.clone());
            inserted = true;
        }
        if inserted {
            trace!(?u, ?v, "edge added");
        }
        inserted
    }

    /// Adds the undirected edge `u - v` between two existing vertices.
    ///
    /// Unlike [`add_edge`](Self::add_edge) this never creates vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] for the first endpoint that is absent.
    pub fn try_add_edge(&mut self, u: V, v: V) -> Result<bool> {
        for endpoint in [&u, &v] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }
        Ok(self.add_edge(u, v))
    }

    /// Returns `true` iff `v` appears in `u`'s neighbor list.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.neighbors(u).contains(v)
    }

    /// Removes the undirected edge `u - v`.
    ///
    /// Each side is handled independently; missing vertices or half-edges are
    /// skipped. Returns `true` if anything was removed.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let mut removed = false;
        if let Some(list) = self.adjacency.get_mut(u) {
            removed |= remove_from(list, v);
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            removed |= remove_from(list, u);
        }
        if removed {
            trace!(?u, ?v, "edge removed");
        }
        removed
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// Returns `false` if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return false;
        };
        for neighbor in neighbors.iter().filter(|&w| w != vertex) {
            if let Some(list) = self.adjacency.get_mut(neighbor) {
                remove_from(list, vertex);
            }
        }
        trace!(?vertex, degree = neighbors.len(), "vertex removed");
        true
    }

    /// Returns the neighbors of `vertex` in insertion order.
    ///
    /// Unknown vertices yield an empty slice; use
    /// [`contains_vertex`](Self::contains_vertex) or
    /// [`try_neighbors`](Self::try_neighbors) to tell them apart from isolated ones.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    /// Returns the neighbors of an existing vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn try_neighbors(&self, vertex: &V) -> Result<&[V]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Returns `true` if `vertex` has an entry, even with no neighbors.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the length of `vertex`'s neighbor list (0 if unknown).
    pub fn degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns the number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let (half_edges, loops) = self
            .adjacency
            .iter()
            .fold((0usize, 0usize), |(half, loops), (v, list)| {
                (half + list.len(), loops + usize::from(list.contains(v)))
            });
        (half_edges + loops) / 2
    }

    /// Iterates over all vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Returns every undirected edge exactly once.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut done: HashSet<&V> = HashSet::with_capacity(self.len());
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, list) in &self.adjacency {
            for w in list {
                if !done.contains(w) {
                    edges.push((u.clone(), w.clone()));
                }
            }
            done.insert(u);
        }
        edges
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Returns `true` if `target` can be reached from `start`.
    pub fn is_reachable(&self, start: &V, target: &V) -> bool {
        traversal::is_reachable(self, start, target)
    }

    /// Breadth-first iterator over the vertices reachable from `start`.
    pub fn bfs(&self, start: &V) -> Bfs<'_, V> {
        Bfs::new(self, start)
    }

    /// Depth-first (pre-order) iterator over the vertices reachable from `start`.
    pub fn dfs(&self, start: &V) -> Dfs<'_, V> {
        Dfs::new(self, start)
    }

    /// Captures the graph as a vertex list plus an edge list.
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        GraphSnapshot {
            vertices: self.adjacency.keys().cloned().collect(),
            edges: self.edges(),
        }
    }

    /// Rebuilds a graph from a snapshot through the normal mutation path.
    pub fn from_snapshot(snapshot: GraphSnapshot<V>) -> Self {
        let mut graph = Self::with_capacity(snapshot.vertices.len());
        for vertex in snapshot.vertices {
            graph.add_vertex(vertex);
        }
        graph.extend(snapshot.edges);
        graph
    }

    /// Computes basic graph statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.len();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.adjacency.values().map(Vec::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let degree_sum: usize = degrees.iter().sum();

        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            degree_sum as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }

    fn list_mut(&mut self, vertex: &V) -> &mut Vec<V> {
        self.adjacency.entry(vertex.clone()).or_default()
    }
}

fn remove_from<V: PartialEq>(list: &mut Vec<V>, value: &V) -> bool {
    let before = list.len();
    list.retain(|v| v != value);
    before != list.len()
}

impl<V: VertexId> Extend<(V, V)> for AdjacencyGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

impl<V: VertexId> FromIterator<(V, V)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}

/// One `v -> [n1, n2]` line per vertex, vertices sorted ascending.
impl<V: VertexId + Ord + fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&V> = self.adjacency.keys().collect();
        vertices.sort_unstable();
        for vertex in vertices {
            write!(f, "{vertex} -> [")?;
            for (i, neighbor) in self.neighbors(vertex).iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Median degree over all vertices.
    pub median_degree: usize,
    /// Average neighbor-list length.
    pub average_degree: f64,
}
