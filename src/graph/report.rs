//! Serializable summaries of a finished traversal.
//!
//! A report is an unbranded snapshot: the order a traversal returned plus a
//! copy of every vertex's state. It no longer needs a token, so it can be
//! printed, serialized or checked after the graph has moved on.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId, VertexState};
use crate::GhostToken;

/// Outcome of one BFS run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsReport {
    /// The source vertex.
    pub source: VertexId,
    /// Dequeue order.
    pub order: Vec<VertexId>,
    /// State of every vertex after the run, by index.
    pub vertices: Vec<VertexState>,
}

impl BfsReport {
    /// Vertices the run never reached, ascending.
    pub fn unreached(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, s)| s.hops().is_none())
            .map(|(v, _)| v)
            .collect()
    }
}

/// Outcome of one DFS run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsReport {
    /// Finish order.
    pub order: Vec<VertexId>,
    /// Roots of the forest, ascending.
    pub roots: Vec<VertexId>,
    /// State of every vertex after the run, by index.
    pub vertices: Vec<VertexState>,
}

impl DfsReport {
    /// Checks the bracket property over every pair of vertices.
    ///
    /// Each vertex must carry an interval with `discovery < finish`, and any
    /// two intervals must be nested or disjoint.
    ///
    /// # Errors
    /// [`GraphError::BracketViolation`] naming the first offending pair
    /// (`a == b` for a vertex whose own interval is missing or empty).
    pub fn check_brackets(&self) -> Result<()> {
        let mut intervals = Vec::with_capacity(self.vertices.len());
        for (v, s) in self.vertices.iter().enumerate() {
            match s.interval() {
                Some((d, f)) if d < f => intervals.push((d, f)),
                _ => return Err(GraphError::BracketViolation { a: v, b: v }),
            }
        }

        for (a, &(da, fa)) in intervals.iter().enumerate() {
            for (b, &(db, fb)) in intervals.iter().enumerate().skip(a + 1) {
                let disjoint = fa < db || fb < da;
                let nested = (da < db && fb < fa) || (db < da && fa < fb);
                if !(disjoint || nested) {
                    return Err(GraphError::BracketViolation { a, b });
                }
            }
        }
        Ok(())
    }

    /// Number of trees in the forest.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }
}

impl<'brand> Graph<'brand> {
    /// Runs [`bfs`](Self::bfs) and captures the result.
    ///
    /// # Errors
    /// Same as [`bfs`](Self::bfs).
    pub fn bfs_report(&self, token: &mut GhostToken<'brand>, source: VertexId) -> Result<BfsReport> {
        let order = self.bfs(token, source)?;
        Ok(BfsReport {
            source,
            order,
            vertices: self.snapshot(token),
        })
    }

    /// Runs [`dfs`](Self::dfs) and captures the result.
    pub fn dfs_report(&self, token: &mut GhostToken<'brand>) -> DfsReport {
        let order = self.dfs(token);
        let vertices = self.snapshot(token);
        let roots = vertices
            .iter()
            .enumerate()
            .filter(|(_, s)| s.parent.is_none())
            .map(|(v, _)| v)
            .collect();
        DfsReport {
            order,
            roots,
            vertices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(d: i64, f: i64) -> VertexState {
        VertexState {
            visited: true,
            discovery_time: d,
            finish_time: f,
            ..VertexState::INITIAL
        }
    }

    fn report(intervals: &[(i64, i64)]) -> DfsReport {
        DfsReport {
            order: Vec::new(),
            roots: Vec::new(),
            vertices: intervals.iter().map(|&(d, f)| state(d, f)).collect(),
        }
    }

    #[test]
    fn nested_and_disjoint_intervals_pass() {
        assert_eq!(report(&[(1, 6), (2, 3), (4, 5), (7, 8)]).check_brackets(), Ok(()));
        assert_eq!(report(&[]).check_brackets(), Ok(()));
    }

    #[test]
    fn partial_overlap_is_reported() {
        assert_eq!(
            report(&[(1, 4), (9, 10), (2, 6)]).check_brackets(),
            Err(GraphError::BracketViolation { a: 0, b: 2 })
        );
    }

    #[test]
    fn missing_interval_is_reported() {
        assert_eq!(
            report(&[(1, 2), (-1, -1)]).check_brackets(),
            Err(GraphError::BracketViolation { a: 1, b: 1 })
        );
        assert_eq!(
            report(&[(5, 5)]).check_brackets(),
            Err(GraphError::BracketViolation { a: 0, b: 0 })
        );
    }

    #[test]
    fn reports_from_a_graph() {
        GhostToken::new(|mut token| {
            // 0 -> 1, 2 isolated
            let graph = Graph::from_edges(3, &[(0, 1)]).unwrap();

            let bfs = graph.bfs_report(&mut token, 0).unwrap();
            assert_eq!(bfs.order, vec![0, 1]);
            assert_eq!(bfs.unreached(), vec![2]);

            let dfs = graph.dfs_report(&mut token);
            assert_eq!(dfs.order, vec![1, 0, 2]);
            assert_eq!(dfs.roots, vec![0, 2]);
            assert_eq!(dfs.tree_count(), 2);
            assert_eq!(dfs.check_brackets(), Ok(()));
        });
    }

    #[test]
    fn report_json_shape() {
        GhostToken::new(|mut token| {
            let graph = Graph::from_edges(2, &[]).unwrap();
            let bfs = graph.bfs_report(&mut token, 1).unwrap();
            let json = serde_json::to_value(&bfs).unwrap();
            assert_eq!(json["source"], 1);
            assert_eq!(json["order"], serde_json::json!([1]));
            assert!(json["vertices"][0]["distance"].is_null());
            assert_eq!(json["vertices"][1]["distance"], 0);
        });
    }
}
