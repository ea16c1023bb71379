//! Dense, index-addressed graphs and their traversals.
//!
//! - `adjacency`: the immutable CSR relation `edge(u, v)`
//! - `state`: the per-vertex traversal record
//! - `branded_graph`: [`Graph`], which pairs the two and runs BFS/DFS
//! - `report`: token-free snapshots of a finished run

pub mod adjacency;
pub mod branded_graph;
pub mod report;
mod state;

/// A vertex index in `[0, N)`.
pub type VertexId = usize;

pub use adjacency::{Adjacency, EdgeFlag};
pub use branded_graph::Graph;
pub use report::{BfsReport, DfsReport};
pub use state::{VertexState, UNASSIGNED, UNREACHED};
