//! Undirected adjacency-list graph and the searches that run over it.
//!
//! The module is organized into:
//! - `adjacency`: the mutable graph store
//! - `traversal`: breadth-first and depth-first reachability search
//! - `snapshot`: a serializable vertex/edge-list form of a graph

use std::fmt::Debug;
use std::hash::Hash;

pub mod adjacency;
pub mod snapshot;
pub mod traversal;
pub(crate) mod access;

pub use adjacency::{AdjacencyGraph, GraphStatistics};
pub use snapshot::GraphSnapshot;
pub use traversal::{
    bfs_levels, bfs_search, dfs_search, is_reachable, Bfs, BreadthFirst, DepthFirst, Dfs,
    SearchConfig, SearchOutcome, Strategy, TraversalKind,
};

#[cfg(feature = "parallel")]
pub use traversal::search_many;

/// Requirements on a vertex identifier.
///
/// Vertices carry no payload; only identity matters. Integers, strings, and any
/// other hashable, cloneable key qualify through the blanket impl.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}
