//! Breadth-first search.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::{log_outcome, start_is_dead, SearchConfig, SearchOutcome, Strategy};
use crate::graph::access::visited::VisitedSet;
use crate::graph::{AdjacencyGraph, VertexId};

/// FIFO search. The first time the target is dequeued it has been reached
/// along a path with the fewest edges, and `path` reports that path.
///
/// Vertices are marked visited when enqueued, so none is ever queued twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl<V: VertexId> Strategy<V> for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn search(
        &self,
        graph: &AdjacencyGraph<V>,
        start: &V,
        target: &V,
        config: &SearchConfig,
    ) -> SearchOutcome<V> {
        if start_is_dead(graph, start, target) {
            let outcome = SearchOutcome::not_found(Vec::new());
            log_outcome(Strategy::<V>::name(self), &outcome);
            return outcome;
        }

        let mut visited = VisitedSet::with_capacity(graph.len());
        let mut parents: HashMap<V, V> = HashMap::new();
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited.try_visit(start);
        queue.push_back((start.clone(), 0usize));

        while let Some((vertex, depth)) = queue.pop_front() {
            trace!(?vertex, depth, "dequeued");
            order.push(vertex.clone());

            if &vertex == target {
                let outcome = SearchOutcome::reached(order, &parents, start, target);
                log_outcome(Strategy::<V>::name(self), &outcome);
                return outcome;
            }
            if !config.expands(depth) {
                continue;
            }
            for neighbor in graph.neighbors(&vertex) {
                if visited.try_visit(neighbor) {
                    parents.insert(neighbor.clone(), vertex.clone());
                    queue.push_back((neighbor.clone(), depth + 1));
                }
            }
        }

        let outcome = SearchOutcome::not_found(order);
        log_outcome(Strategy::<V>::name(self), &outcome);
        outcome
    }
}

/// Returns the vertices reachable from `start` grouped by distance:
/// `levels[d]` holds every vertex exactly `d` edges away, in discovery order.
///
/// Empty if `start` is not in the graph.
pub fn bfs_levels<V: VertexId>(graph: &AdjacencyGraph<V>, start: &V) -> Vec<Vec<V>> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited = VisitedSet::with_capacity(graph.len());
    visited.try_visit(start);

    let mut levels = Vec::new();
    let mut frontier = vec![start.clone()];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for vertex in &frontier {
            for neighbor in graph.neighbors(vertex) {
                if visited.try_visit(neighbor) {
                    next.push(neighbor.clone());
                }
            }
        }
        levels.push(frontier);
        frontier = next;
    }
    levels
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields every vertex reachable from the start, nearest first.
pub struct Bfs<'a, V> {
    graph: &'a AdjacencyGraph<V>,
    visited: VisitedSet<V>,
    queue: VecDeque<V>,
}

impl<'a, V: VertexId> Bfs<'a, V> {
    /// Creates a new BFS iterator starting from `start`.
    pub fn new(graph: &'a AdjacencyGraph<V>, start: &V) -> Self {
        let mut visited = VisitedSet::with_capacity(graph.len());
        let mut queue = VecDeque::new();

        if graph.contains_vertex(start) {
            visited.try_visit(start);
            queue.push_back(start.clone());
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<V: VertexId> Iterator for Bfs<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for neighbor in self.graph.neighbors(&vertex) {
            if self.visited.try_visit(neighbor) {
                self.queue.push_back(neighbor.clone());
            }
        }

        Some(vertex)
    }
}
