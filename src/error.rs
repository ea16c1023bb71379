//! Error type for graph construction, inspection and traversal.

use thiserror::Error;

use crate::graph::VertexId;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Errors reported by [`Graph`](crate::Graph) and [`Adjacency`](crate::Adjacency).
///
/// Every variant is a precondition violation by the caller. None of them is
/// retried or recovered internally; once inputs are validated the traversals
/// themselves cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index outside `[0, N)`.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    OutOfRange {
        /// The offending index.
        vertex: VertexId,
        /// `N` of the graph.
        vertex_count: usize,
    },
    /// A BFS source outside `[0, N)`.
    #[error("BFS source {vertex} is out of range for a graph of {vertex_count} vertices")]
    InvalidSource {
        /// The offending source index.
        vertex: VertexId,
        /// `N` of the graph.
        vertex_count: usize,
    },
    /// An adjacency matrix row whose length differs from the number of rows.
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },
    /// Two DFS intervals that partially overlap.
    #[error("DFS intervals of vertices {a} and {b} partially overlap")]
    BracketViolation {
        /// First vertex of the pair.
        a: VertexId,
        /// Second vertex of the pair.
        b: VertexId,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::OutOfRange`].
    #[inline]
    pub(crate) fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex,
            vertex_count,
        }
    }
}
