//! Error types for the strict graph operations.
//!
//! Lenient operations (`add_edge`, `neighbors`, searches) never fail: unknown
//! vertices degrade to "absent" or "not found". Only the `try_*` family reports
//! a missing vertex as an error.

use thiserror::Error;

/// Graph error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex named by a strict operation is not in the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
