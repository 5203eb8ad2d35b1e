//! # `adjgraph` - Undirected Graph Store and Reachability Search
//!
//! An adjacency-list graph over arbitrary hashable vertex keys, plus two
//! interchangeable reachability strategies that read it.
//!
//! ## Guarantees
//!
//! ### Structural Invariants
//! - **Symmetry**: `v` is in `u`'s neighbor list iff `u` is in `v`'s. Every
//!   mutation preserves this; there is no way to create a one-sided edge.
//! - **No duplicate edges**: adding an edge that already exists is a no-op.
//! - **Implicit endpoints**: [`AdjacencyGraph::add_edge`] creates missing
//!   vertices. [`AdjacencyGraph::try_add_edge`] is the strict variant.
//! - **Stable isolation**: removing a vertex's last edge leaves the vertex.
//!
//! ### Search Semantics
//! - Breadth-first and depth-first search agree on reachability for every
//!   graph and every `(start, target)` pair.
//! - Breadth-first search reaches the target along a fewest-edges path.
//! - `start == target` succeeds immediately, even for an unknown vertex.
//! - Unknown vertices are "not found", never an error.
//! - Depth-first search runs on an explicit stack; graph depth is bounded by
//!   heap memory, not the call stack.
//!
//! ## Concurrency
//!
//! Everything is synchronous. Searches borrow the graph immutably and own
//! their traversal state, so any number may run concurrently (see
//! `search_many` behind the `parallel` feature) while mutation requires
//! `&mut` and therefore waits for them all.
//!
//! ## Logging
//!
//! Mutations and traversal steps emit `tracing` events at `trace` level; each
//! finished search emits one `debug` event. Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::{AdjacencyGraph, BreadthFirst, DepthFirst, SearchConfig, Strategy};
//!
//! let mut graph = AdjacencyGraph::new();
//! for (u, v) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (5, 6)] {
//!     graph.add_edge(u, v);
//! }
//!
//! let config = SearchConfig::default();
//! let bfs = BreadthFirst.search(&graph, &1, &6, &config);
//! let dfs = DepthFirst.search(&graph, &1, &6, &config);
//! assert!(bfs.found && dfs.found);
//! assert_eq!(bfs.path, Some(vec![1, 3, 6]));
//!
//! graph.remove_vertex(&2);
//! assert_eq!(graph.neighbors(&1), &[3]);
//! assert!(graph.neighbors(&4).is_empty());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    bfs_levels, bfs_search, dfs_search, is_reachable, AdjacencyGraph, Bfs, BreadthFirst,
    DepthFirst, Dfs, GraphSnapshot, GraphStatistics, SearchConfig, SearchOutcome, Strategy,
    TraversalKind, VertexId,
};

#[cfg(feature = "parallel")]
pub use graph::search_many;
