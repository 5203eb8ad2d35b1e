//! Depth-first search on an explicit stack.
//!
//! Each stack frame holds a vertex and the index of the next neighbor to try.
//! A step advances the top frame to its next unvisited neighbor, marks it and
//! pushes its frame; an exhausted frame is popped. This is recursive pre-order
//! exactly, and since a vertex is marked before it is pushed the stack holds at
//! most \(O(V)\) frames, on the heap instead of the call stack.

use std::collections::HashMap;

use tracing::trace;

use super::{log_outcome, start_is_dead, SearchConfig, SearchOutcome, Strategy};
use crate::graph::access::visited::VisitedSet;
use crate::graph::{AdjacencyGraph, VertexId};

/// LIFO search in neighbor-list order.
///
/// Stops as soon as the target is marked. The reported path is the branch of
/// the depth-first tree that led there, which is not necessarily shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl<V: VertexId> Strategy<V> for DepthFirst {
    fn name(&self) -> &'static str {
        "depth-first"
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
        let mut order = vec![start.clone()];
        visited.try_visit(start);
        trace!(vertex = ?start, depth = 0usize, "marked");

        if start == target {
            let outcome = SearchOutcome::reached(order, &parents, start, target);
            log_outcome(Strategy::<V>::name(self), &outcome);
            return outcome;
        }

        // (vertex, next neighbor index, depth)
        let mut stack: Vec<(V, usize, usize)> = Vec::new();
        if config.expands(0) {
            stack.push((start.clone(), 0, 0));
        }

        while let Some((vertex, next, depth)) = stack.last_mut() {
            let neighbors = graph.neighbors(vertex);
            let Some(offset) = neighbors[*next..]
                .iter()
                .position(|n| !visited.is_visited(n))
            else {
                stack.pop();
                continue;
            };
            *next += offset + 1;
            let neighbor = neighbors[*next - 1].clone();
            let depth = *depth + 1;

            visited.try_visit(&neighbor);
            trace!(vertex = ?neighbor, depth, "marked");
            parents.insert(neighbor.clone(), vertex.clone());
            order.push(neighbor.clone());

            if &neighbor == target {
                let outcome = SearchOutcome::reached(order, &parents, start, target);
                log_outcome(Strategy::<V>::name(self), &outcome);
                return outcome;
            }
            if config.expands(depth) {
                stack.push((neighbor, 0, depth));
            }
        }

        let outcome = SearchOutcome::not_found(order);
        log_outcome(Strategy::<V>::name(self), &outcome);
        outcome
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields every vertex reachable from the start in pre-order.
pub struct Dfs<'a, V> {
    graph: &'a AdjacencyGraph<V>,
    visited: VisitedSet<V>,
    pending: Option<V>,
    // (vertex, next neighbor index)
    stack: Vec<(V, usize)>,
}

impl<'a, V: VertexId> Dfs<'a, V> {
    /// Creates a new DFS iterator starting from `start`.
    pub fn new(graph: &'a AdjacencyGraph<V>, start: &V) -> Self {
        let mut visited = VisitedSet::with_capacity(graph.len());
        let pending = graph.contains_vertex(start).then(|| {
            visited.try_visit(start);
            start.clone()
        });

        Self {
            graph,
            visited,
            pending,
            stack: Vec::new(),
        }
    }
}

impl<V: VertexId> Iterator for Dfs<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            self.stack.push((start.clone(), 0));
            return Some(start);
        }

        while let Some((vertex, next)) = self.stack.last_mut() {
            let neighbors = self.graph.neighbors(vertex);
            let visited = &self.visited;
            match neighbors[*next..].iter().position(|n| !visited.is_visited(n)) {
                Some(offset) => {
                    *next += offset + 1;
                    let neighbor = neighbors[*next - 1].clone();
                    self.visited.try_visit(&neighbor);
                    self.stack.push((neighbor.clone(), 0));
                    return Some(neighbor);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
