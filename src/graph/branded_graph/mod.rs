//! `Graph` - a fixed vertex set, a read-only adjacency relation and branded
//! per-vertex traversal state.
//!
//! The adjacency relation is plain immutable data and may be shared freely.
//! The state table lives in a [`BrandedVec`], so:
//! - inspecting state needs `&GhostToken<'brand>`
//! - traversing (reset + rewrite) needs `&mut GhostToken<'brand>`
//!
//! Because the token is linear, one traversal generation is in flight at a
//! time: a second BFS/DFS over the same graph cannot start until the first has
//! returned and released the token. Callers that want traversals on several
//! threads give each thread its own graph (or its own brand) over a cloned
//! [`Adjacency`].

mod bfs;
mod dfs;


use crate::collections::BrandedVec;
use crate::error::Result;
use crate::graph::{Adjacency, EdgeFlag, VertexId, VertexState};
use crate::GhostToken;

/// A directed graph over vertices `0..N` with branded traversal state.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `bfs` | \(O(n + m)\) | FIFO queue, one reset pass |
/// | `dfs` | \(O(n + m)\) | Explicit frame stack, no recursion |
/// | `reset_state` | \(O(n)\) | Contiguous fill |
/// | `state` | \(O(1)\) | Indexed read |
/// | `path_to` | \(O(\text{depth})\) | Walks parent links |
pub struct Graph<'brand> {
    pub(super) adjacency: Adjacency,
    pub(super) state: BrandedVec<'brand, VertexState>,
}

impl<'brand> Graph<'brand> {
    /// Wraps an existing relation; every vertex starts in [`VertexState::INITIAL`].
    pub fn from_adjacency(adjacency: Adjacency) -> Self {
        let state = BrandedVec::from_fn(adjacency.vertex_count(), |_| VertexState::INITIAL);
        Self { adjacency, state }
    }

    /// Builds a graph from an `N x N` adjacency matrix (`0`/`1` or `bool` entries).
    ///
    /// # Errors
    /// [`GraphError::NotSquare`](crate::GraphError::NotSquare) if a row does not
    /// have exactly `N` entries.
    pub fn from_matrix<R, T>(matrix: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: EdgeFlag,
    {
        Adjacency::from_matrix(matrix).map(Self::from_adjacency)
    }

    /// Builds a graph from adjacency lists.
    ///
    /// # Errors
    /// [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) for a target `>= N`.
    pub fn from_lists<L>(lists: &[L]) -> Result<Self>
    where
        L: AsRef<[VertexId]>,
    {
        Adjacency::from_lists(lists).map(Self::from_adjacency)
    }

    /// Builds a graph over `n` vertices from directed edges.
    ///
    /// # Errors
    /// [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) for an endpoint `>= n`.
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        Adjacency::from_edges(n, edges).map(Self::from_adjacency)
    }

    /// `N`, fixed for the lifetime of the graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Returns `true` for the graph with no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// The read-only adjacency relation.
    #[inline]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Out-neighbors of `vertex`, lazily, in ascending index order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.adjacency.neighbors(vertex)
    }

    /// The relation `edge(from, to)`.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.adjacency.has_edge(from, to)
    }

    /// Out-degree of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.adjacency.out_degree(vertex)
    }

    /// Whether the relation is undirected. Informational; never enforced.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.is_symmetric()
    }

    /// Resets every vertex to [`VertexState::INITIAL`].
    ///
    /// Both traversals call this on entry, so it is rarely needed directly.
    pub fn reset_state(&self, token: &mut GhostToken<'brand>) {
        self.state.fill_with(token, || VertexState::INITIAL);
    }

    /// Current state of `vertex`.
    pub fn state<'a>(&'a self, token: &'a GhostToken<'brand>, vertex: VertexId) -> Result<&'a VertexState> {
        self.adjacency.check(vertex)?;
        Ok(self.state.borrow(token, vertex))
    }

    /// Current state of every vertex, in index order.
    pub fn states<'a>(&'a self, token: &'a GhostToken<'brand>) -> impl Iterator<Item = &'a VertexState> + 'a {
        self.state.iter(token)
    }

    /// An unbranded copy of the whole state table.
    ///
    /// The copy outlives the token borrow, so it can be handed to another
    /// thread or kept while the next traversal rewrites the graph.
    pub fn snapshot(&self, token: &GhostToken<'brand>) -> Vec<VertexState> {
        self.state.to_vec(token)
    }

    /// Follows `parent` links from `vertex` to the root of its tree.
    ///
    /// Returns the path root-first. After [`bfs`](Self::bfs) this is a shortest
    /// path from the source; after [`dfs`](Self::dfs) it is the forest path
    /// from `vertex`'s root. `None` if the latest traversal never touched
    /// `vertex`.
    pub fn path_to(&self, token: &GhostToken<'brand>, vertex: VertexId) -> Result<Option<Vec<VertexId>>> {
        let states = self.state.as_slice(token);
        if !self.state(token, vertex)?.is_touched() {
            return Ok(None);
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = states[current].parent {
            // Parent links always form a forest; a longer walk means the state
            // was written by something other than a traversal.
            debug_assert!(path.len() <= states.len(), "parent links contain a cycle");
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(Some(path))
    }
}
