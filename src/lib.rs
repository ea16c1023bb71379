//! # `trellis` - Branded Graph Traversal
//!
//! Breadth-first and depth-first traversal over dense graphs whose vertices
//! are the integers `0..N`. Each vertex carries a traversal-state record
//! (`visited`, `distance`, `parent`, `discovery_time`, `finish_time`) that the
//! two algorithms reset and repopulate:
//!
//! - [`Graph::bfs`] computes minimum hop counts and a BFS tree from one
//!   source and returns the dequeue order.
//! - [`Graph::dfs`] builds a depth-first forest covering every vertex,
//!   stamps discovery/finish times from one shared clock and returns the
//!   finish order.
//!
//! ## Architecture
//!
//! The adjacency relation is an immutable CSR [`Adjacency`] with every row
//! sorted ascending, which fixes the neighbor scan order and makes both
//! traversals deterministic. Vertex state is stored contiguously in a
//! [`BrandedVec`](collections::BrandedVec) and gated by a ghost token:
//!
//! 1. **Ghost Tokens** (`GhostToken<'brand>`): zero-sized linear
//!    capabilities, created by [`GhostToken::new`].
//! 2. **Ghost Cells** (`GhostCell<'brand, T>`): interior mutability that
//!    needs `&GhostToken` to read and `&mut GhostToken` to write.
//! 3. **Graphs** (`Graph<'brand>`): traversals take `&mut GhostToken<'brand>`,
//!    so at most one traversal generation per graph is ever in flight, and
//!    inspecting state needs only a shared token.
//!
//! Neither traversal recurses: DFS keeps an explicit stack of
//! `(vertex, cursor)` frames, so path depth is bounded by heap memory, not by
//! the thread's call stack.
//!
//! ## Example
//!
//! ```rust
//! use trellis::{GhostToken, Graph};
//!
//! let matrix = [
//!     [0, 1, 0, 0, 1],
//!     [1, 0, 1, 1, 1],
//!     [0, 1, 0, 1, 0],
//!     [0, 1, 1, 0, 1],
//!     [1, 1, 0, 1, 0],
//! ];
//!
//! GhostToken::new(|mut token| {
//!     let graph = Graph::from_matrix(&matrix).unwrap();
//!
//!     assert_eq!(graph.bfs(&mut token, 3).unwrap(), vec![3, 1, 2, 4, 0]);
//!     assert_eq!(graph.state(&token, 0).unwrap().distance, 2);
//!
//!     let finish_order = graph.dfs(&mut token);
//!     assert_eq!(finish_order.len(), 5);
//!     assert_eq!(graph.state(&token, 0).unwrap().discovery_time, 1);
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event when the `tracing` feature is on; expands to nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    }};
}

pub mod cell;
pub mod collections;
pub mod error;
pub mod graph;
pub mod token;

pub use cell::GhostCell;
pub use collections::BrandedVec;
pub use error::{GraphError, Result};
pub use graph::{
    Adjacency, BfsReport, DfsReport, EdgeFlag, Graph, VertexId, VertexState, UNASSIGNED, UNREACHED,
};
pub use token::GhostToken;

// Compile-time layout assertions.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // `BrandedVec::as_slice` reinterprets `[GhostCell<T>]` as `[T]`.
    assert!(mem::size_of::<GhostCell<'static, VertexState>>() == mem::size_of::<VertexState>());
    assert!(mem::align_of::<GhostCell<'static, VertexState>>() == mem::align_of::<VertexState>());
};
