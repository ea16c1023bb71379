//! Breadth-first search.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::{state, Graph, VertexId};
use crate::GhostToken;

impl<'brand> Graph<'brand> {
    /// Level-order traversal from `source`.
    ///
    /// Returns vertices in dequeue order. On return, for every vertex reachable
    /// from `source`:
    /// - `distance` is the minimum hop count (`0` for the source)
    /// - `parent` is its BFS-tree predecessor (`None` for the source)
    /// - `visited` is `true`
    ///
    /// Unreachable vertices keep [`UNREACHED`](crate::UNREACHED),
    /// `visited == false` and `parent == None`, and are absent from the order.
    ///
    /// `visited` means *expanded*, not *discovered*: a vertex sitting in the
    /// queue already has its distance but is not yet visited. Enqueueing is
    /// gated on "has a distance", so each vertex enters the queue at most once
    /// and the first distance assigned is never overwritten.
    ///
    /// # Errors
    /// [`GraphError::InvalidSource`] if `source >= N`; state is left untouched.
    pub fn bfs(&self, token: &mut GhostToken<'brand>, source: VertexId) -> Result<Vec<VertexId>> {
        let n = self.vertex_count();
        if source >= n {
            return Err(GraphError::InvalidSource {
                vertex: source,
                vertex_count: n,
            });
        }

        let states = self.state.as_mut_slice(token);
        state::reset_all(states);

        trace_event!(debug, vertices = n, source, "bfs start");

        states[source].distance = 0;
        let mut queue = VecDeque::with_capacity(n);
        queue.push_back(source);
        let mut order = Vec::with_capacity(n);

        while let Some(u) = queue.pop_front() {
            let next = states[u].distance + 1;
            for &v in self.adjacency.row_unchecked(u) {
                let target = &mut states[v];
                if !target.visited && !target.is_reached() {
                    target.distance = next;
                    target.parent = Some(u);
                    queue.push_back(v);
                }
            }
            states[u].visited = true;
            order.push(u);

            trace_event!(trace, vertex = u, distance = next - 1, queued = queue.len(), "bfs expand");
        }

        trace_event!(debug, source, reached = order.len(), "bfs finished");
        Ok(order)
    }

    /// Runs [`bfs`](Self::bfs) and returns the distance column.
    ///
    /// Unreached vertices read [`UNREACHED`](crate::UNREACHED).
    pub fn bfs_distances(&self, token: &mut GhostToken<'brand>, source: VertexId) -> Result<Vec<usize>> {
        self.bfs(token, source)?;
        Ok(self.states(token).map(|s| s.distance).collect())
    }
}
