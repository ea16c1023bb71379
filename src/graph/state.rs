//! Per-vertex traversal state.
//!
//! One [`VertexState`] record per vertex, stored contiguously and addressed by
//! vertex index. BFS owns `visited`, `distance` and `parent`; DFS owns
//! `visited`, `parent`, `discovery_time` and `finish_time`. Both reset every
//! field before they run, so a record only ever describes the latest traversal.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Distance of a vertex that the last BFS never reached.
///
/// No real hop count can equal it: a shortest path visits at most `N` vertices,
/// so its length is at most `N - 1 < usize::MAX`.
pub const UNREACHED: usize = usize::MAX;

/// DFS timestamp that has not been assigned yet.
pub const UNASSIGNED: i64 = -1;

/// The mutable traversal fields of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexState {
    /// BFS: fully expanded. DFS: discovered.
    pub visited: bool,
    /// BFS hop count from the source, or [`UNREACHED`].
    #[serde(with = "distance_sentinel")]
    pub distance: usize,
    /// Tree edge into this vertex: BFS tree after BFS, DFS forest after DFS.
    /// `None` for roots and for vertices the traversal never touched.
    pub parent: Option<VertexId>,
    /// DFS discovery timestamp, or [`UNASSIGNED`].
    pub discovery_time: i64,
    /// DFS finish timestamp, or [`UNASSIGNED`].
    pub finish_time: i64,
}

impl VertexState {
    /// The state every vertex starts with and returns to on reset.
    pub const INITIAL: Self = Self {
        visited: false,
        distance: UNREACHED,
        parent: None,
        discovery_time: UNASSIGNED,
        finish_time: UNASSIGNED,
    };

    /// `true` once BFS has assigned a distance.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHED
    }

    /// BFS distance, or `None` for unreached vertices.
    #[inline]
    pub const fn hops(&self) -> Option<usize> {
        if self.is_reached() {
            Some(self.distance)
        } else {
            None
        }
    }

    /// `(discovery_time, finish_time)` once DFS has assigned both.
    #[inline]
    pub const fn interval(&self) -> Option<(i64, i64)> {
        if self.discovery_time == UNASSIGNED || self.finish_time == UNASSIGNED {
            None
        } else {
            Some((self.discovery_time, self.finish_time))
        }
    }

    /// `true` if the latest traversal touched this vertex at all.
    #[inline]
    pub(crate) const fn is_touched(&self) -> bool {
        self.visited || self.is_reached()
    }
}

impl Default for VertexState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Clears a whole state table in place.
#[inline]
pub(crate) fn reset_all(states: &mut [VertexState]) {
    states.fill(VertexState::INITIAL);
}

/// Serializes [`UNREACHED`] as `null` so reports never leak the sentinel value.
mod distance_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UNREACHED;

    pub(super) fn serialize<S: Serializer>(distance: &usize, s: S) -> Result<S::Ok, S::Error> {
        if *distance == UNREACHED {
            s.serialize_none()
        } else {
            s.serialize_some(distance)
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
        Ok(Option::<usize>::deserialize(d)?.unwrap_or(UNREACHED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_untouched() {
        let s = VertexState::default();
        assert!(!s.visited);
        assert_eq!(s.distance, UNREACHED);
        assert_eq!(s.parent, None);
        assert_eq!(s.discovery_time, -1);
        assert_eq!(s.finish_time, -1);
        assert!(!s.is_reached());
        assert!(!s.is_touched());
        assert_eq!(s.hops(), None);
        assert_eq!(s.interval(), None);
    }

    #[test]
    fn interval_needs_both_times() {
        let mut s = VertexState {
            discovery_time: 3,
            ..VertexState::INITIAL
        };
        assert_eq!(s.interval(), None);
        s.finish_time = 8;
        assert_eq!(s.interval(), Some((3, 8)));
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut table = [VertexState {
            visited: true,
            distance: 2,
            parent: Some(0),
            discovery_time: 1,
            finish_time: 4,
        }; 3];
        reset_all(&mut table);
        assert!(table.iter().all(|s| *s == VertexState::INITIAL));
    }

    #[test]
    fn unreached_distance_serializes_as_null() {
        let json = serde_json::to_value(VertexState::INITIAL).unwrap();
        assert!(json["distance"].is_null());

        let reached = VertexState {
            distance: 2,
            ..VertexState::INITIAL
        };
        let json = serde_json::to_string(&reached).unwrap();
        let back: VertexState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reached);

        let back: VertexState = serde_json::from_value(serde_json::to_value(VertexState::INITIAL).unwrap()).unwrap();
        assert_eq!(back.distance, UNREACHED);
    }
}
