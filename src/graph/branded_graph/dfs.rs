//! Depth-first search building a discovery/finish-timestamped forest.
//!
//! The visit is iterative: each active vertex is a [`Frame`] holding its
//! position (`cursor`) in its own CSR row. Resuming a frame continues the
//! neighbor scan exactly where a recursive visit would return to, so the
//! timestamps match the textbook recursive algorithm while auxiliary memory
//! stays at one frame per vertex on the current path. Deep chains of a million
//! vertices cost a `Vec` of a million frames, not a million call frames.

use crate::error::Result;
use crate::graph::{state, Adjacency, Graph, VertexId, VertexState};
use crate::GhostToken;

/// The DFS timestamp counter for one run.
///
/// Threaded by `&mut` through the visit; a fresh clock per call keeps
/// sequential runs (on this or any other graph) independent.
#[derive(Debug, Default)]
struct DfsClock(i64);

impl DfsClock {
    #[inline(always)]
    fn tick(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

/// A suspended visit of `vertex`; `cursor` indexes its next unscanned neighbor.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Scratch space and output of one DFS run.
struct DfsRun<'g> {
    adjacency: &'g Adjacency,
    clock: DfsClock,
    stack: Vec<Frame>,
    order: Vec<VertexId>,
}

impl<'g> DfsRun<'g> {
    fn new(adjacency: &'g Adjacency) -> Self {
        Self {
            adjacency,
            clock: DfsClock::default(),
            stack: Vec::new(),
            order: Vec::with_capacity(adjacency.vertex_count()),
        }
    }

    fn discover(&mut self, states: &mut [VertexState], vertex: VertexId) {
        let s = &mut states[vertex];
        s.discovery_time = self.clock.tick();
        // Marked before any neighbor is scanned, so cycles back to `vertex` stop here.
        s.visited = true;
        self.stack.push(Frame { vertex, cursor: 0 });
    }

    /// Visits the whole tree rooted at `root`, which must be unvisited.
    fn visit_tree(&mut self, states: &mut [VertexState], root: VertexId) {
        debug_assert!(!states[root].visited);
        trace_event!(trace, root, "dfs tree start");
        self.discover(states, root);

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.vertex;
            let row = self.adjacency.row_unchecked(u);

            let mut child = None;
            while let Some(&v) = row.get(frame.cursor) {
                frame.cursor += 1;
                if !states[v].visited {
                    child = Some(v);
                    break;
                }
            }

            match child {
                Some(v) => {
                    states[v].parent = Some(u);
                    self.discover(states, v);
                }
                None => {
                    self.stack.pop();
                    states[u].finish_time = self.clock.tick();
                    self.order.push(u);
                }
            }
        }
    }
}

impl<'brand> Graph<'brand> {
    /// Depth-first forest over every vertex.
    ///
    /// Roots are taken in ascending index order among still-unvisited
    /// vertices, and neighbors are scanned in ascending order. Returns the
    /// vertices in finish order (post-order). On return every vertex has:
    /// - `visited == true`
    /// - `discovery_time < finish_time`, both in `1..=2N`, one shared clock
    ///   across all trees
    /// - `parent` set to its DFS-tree predecessor, `None` for tree roots
    ///
    /// For every tree edge `p -> v`:
    /// `discovery(p) < discovery(v) < finish(v) < finish(p)`.
    pub fn dfs(&self, token: &mut GhostToken<'brand>) -> Vec<VertexId> {
        let states = self.state.as_mut_slice(token);
        state::reset_all(states);

        let mut run = DfsRun::new(&self.adjacency);
        for root in 0..self.vertex_count() {
            if !states[root].visited {
                run.visit_tree(states, root);
            }
        }

        trace_event!(debug, vertices = self.vertex_count(), "dfs finished");
        run.order
    }

    /// A single depth-first tree rooted at `root`.
    ///
    /// All state is reset first; vertices not reachable from `root` stay in
    /// [`VertexState::INITIAL`]. Timestamps start at `1`, as in [`dfs`](Self::dfs).
    ///
    /// # Errors
    /// [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) if `root >= N`.
    pub fn dfs_from(&self, token: &mut GhostToken<'brand>, root: VertexId) -> Result<Vec<VertexId>> {
        self.adjacency.check(root)?;

        let states = self.state.as_mut_slice(token);
        state::reset_all(states);

        let mut run = DfsRun::new(&self.adjacency);
        run.visit_tree(states, root);

        trace_event!(debug, root, reached = run.order.len(), "dfs tree finished");
        Ok(run.order)
    }
}
