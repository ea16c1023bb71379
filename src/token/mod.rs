//! `GhostToken` - the capability that gates traversal state.
//!
//! Every [`Graph`](crate::Graph) keeps its per-vertex traversal state in
//! token-gated cells. Reading that state needs `&GhostToken<'brand>`; running
//! a traversal (which resets and rewrites it) needs `&mut GhostToken<'brand>`.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Any safe API that can
//! produce `&mut T` from a branded cell requires `&mut GhostToken<'brand>`, and
//! Rust guarantees two live mutable borrows of the same token cannot coexist.
//! For graphs this means one traversal generation at a time per brand: a BFS
//! cannot start while a DFS over the same state is still writing timestamps.

/// Invariant lifetime markers used for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token that controls access to branded cells.
///
/// The lifetime parameter is the brand: cells and graphs created inside one
/// [`GhostToken::new`] closure can only be opened with that closure's token.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trellis::{GhostToken, Graph};
    ///
    /// let order = GhostToken::new(|mut token| {
    ///     let graph = Graph::from_lists(&[vec![1], vec![2], vec![]]).unwrap();
    ///     graph.bfs(&mut token, 0).unwrap()
    /// });
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}

// SAFETY: the token carries no data. Sharing `&GhostToken<'brand>` across threads
// only enables token-gated reads (`&T`), which the cells already restrict to
// `T: Sync`. Exclusive access still needs `&mut GhostToken<'brand>`, which the
// borrow checker keeps unique.
unsafe impl<'brand> Sync for GhostToken<'brand> {}
