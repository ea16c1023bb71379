//! Read-only adjacency relation in CSR (compressed sparse row) form.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous out-neighbors of every row, each row sorted
//!   ascending with duplicates removed
//!
//! Sorted rows are what make traversal output reproducible: both BFS and DFS
//! scan neighbors in ascending index order, and a CSR row already is that order.
//! The relation is directed. An undirected graph is one where `edge(u, v)` and
//! `edge(v, u)` always agree; that is a property of the input, reported by
//! [`Adjacency::is_symmetric`] but never enforced.

use core::{iter::Copied, slice};

use crate::error::{GraphError, Result};
use crate::graph::VertexId;

/// A value that can mark the presence of an edge in an adjacency matrix.
///
/// `true` or any nonzero integer is an edge.
pub trait EdgeFlag: Copy {
    /// Returns `true` if this entry denotes an edge.
    fn is_edge(self) -> bool;
}

impl EdgeFlag for bool {
    #[inline(always)]
    fn is_edge(self) -> bool {
        self
    }
}

macro_rules! impl_edge_flag_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeFlag for $t {
                #[inline(always)]
                fn is_edge(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_edge_flag_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Immutable directed adjacency relation over vertices `0..n`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_matrix` | \(O(n^2)\) | One pass over the matrix |
/// | `from_lists` / `from_edges` | \(O(n + m \log m)\) | Rows are sorted and de-duplicated |
/// | `neighbors` | \(O(1)\) | Returns an iterator over the row |
/// | `out_degree` | \(O(1)\) | Difference of two offsets |
/// | `has_edge` | \(O(\log \text{out-degree})\) | Binary search in the sorted row |
/// | `is_symmetric` | \(O(m \log m)\) | One `has_edge` per edge |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<VertexId>,
}

impl Adjacency {
    /// Builds the relation from an `n x n` matrix; `matrix[u][v]` marks `u -> v`.
    ///
    /// `n` is the number of rows. Every row must have exactly `n` entries.
    pub fn from_matrix<R, T>(matrix: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: EdgeFlag,
    {
        let n = matrix.len();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::new();
        offsets.push(0);

        for (row, entries) in matrix.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            targets.extend(
                entries
                    .iter()
                    .enumerate()
                    .filter(|(_, flag)| flag.is_edge())
                    .map(|(v, _)| v),
            );
            offsets.push(targets.len());
        }

        Ok(Self { offsets, targets })
    }

    /// Builds the relation from adjacency lists; `lists[u]` holds the targets of `u`.
    ///
    /// Lists may be unsorted and may repeat a target; the stored rows are
    /// normalized either way.
    pub fn from_lists<L>(lists: &[L]) -> Result<Self>
    where
        L: AsRef<[VertexId]>,
    {
        let n = lists.len();
        let rows = lists
            .iter()
            .map(|list| {
                let list = list.as_ref();
                match list.iter().find(|&&v| v >= n) {
                    Some(&v) => Err(GraphError::out_of_range(v, n)),
                    None => Ok(list.to_vec()),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows(rows))
    }

    /// Builds the relation over `n` vertices from a directed edge list.
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut rows = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u >= n {
                return Err(GraphError::out_of_range(u, n));
            }
            if v >= n {
                return Err(GraphError::out_of_range(v, n));
            }
            rows[u].push(v);
        }
        Ok(Self::from_rows(rows))
    }

    fn from_rows(mut rows: Vec<Vec<VertexId>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);
        let mut targets = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
            targets.extend_from_slice(row);
            offsets.push(targets.len());
        }
        Self { offsets, targets }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of directed edges (a self-loop counts once).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns `Ok(())` if `vertex` is in `[0, N)`.
    #[inline]
    pub fn check(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// The sorted out-neighbors of `vertex`.
    #[inline]
    pub fn row(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.check(vertex)?;
        Ok(self.row_unchecked(vertex))
    }

    /// Row access for vertices already validated by the caller.
    ///
    /// Panics (via slice indexing) if `vertex >= N`.
    #[inline(always)]
    pub(crate) fn row_unchecked(&self, vertex: VertexId) -> &[VertexId] {
        &self.targets[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// Out-neighbors of `vertex` in ascending order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Copied<slice::Iter<'_, VertexId>>> {
        Ok(self.row(vertex)?.iter().copied())
    }

    /// Out-degree of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check(vertex)?;
        Ok(self.offsets[vertex + 1] - self.offsets[vertex])
    }

    /// The relation `edge(from, to)`.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.check(to)?;
        Ok(self.row(from)?.binary_search(&to).is_ok())
    }

    /// Iterates over every edge `(u, v)`, ordered by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        (0..self.vertex_count())
            .flat_map(move |u| self.row_unchecked(u).iter().map(move |&v| (u, v)))
    }

    /// Returns `true` if `edge(u, v) == edge(v, u)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.edges()
            .all(|(u, v)| self.row_unchecked(v).binary_search(&u).is_ok())
    }
}
