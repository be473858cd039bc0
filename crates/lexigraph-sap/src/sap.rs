//! Shortest-ancestral-path resolver.
//!
//! A query runs two independent BFS passes (one per side), then scans all
//! vertices for the one minimizing the sum of the two distances. Results
//! are memoized per canonical query key for the lifetime of the engine;
//! the graph is immutable, so entries never go stale.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::bfs::BfsDistances;
use crate::digraph::{AdjacencySource, CsrDigraph};

/// Errors that can occur during a SAP query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SapError {
    #[error("vertex {vertex} is out of range for a digraph with {bound} vertices")]
    VertexOutOfBounds { vertex: usize, bound: usize },

    #[error("query vertex set must be non-empty")]
    EmptySet,
}

pub type SapResult<T> = Result<T, SapError>;

/// A common ancestor achieving the shortest ancestral path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ancestor {
    /// Vertex reachable from both query sides with the minimal distance sum.
    pub vertex: usize,
    /// That minimal sum of the two directed path lengths.
    pub length: usize,
}

/// Canonical identity of a query: the two sides as sorted, deduplicated
/// vertex sequences. Forward and swapped keys are both inserted on a miss,
/// so `(v, w)` and `(w, v)` hit the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SapKey(Vec<usize>, Vec<usize>);

fn canonical_side(side: &[usize]) -> Vec<usize> {
    let mut side = side.to_vec();
    side.sort_unstable();
    side.dedup();
    side
}

/// Shortest-ancestral-path engine over an immutable digraph.
///
/// Construction deep-copies the caller's graph; later mutation of the
/// source cannot affect query results. Queries take `&self` and are safe
/// for concurrent callers.
#[derive(Debug)]
pub struct Sap {
    graph: CsrDigraph,
    memo: Mutex<FxHashMap<SapKey, Option<Ancestor>>>,
    hits: AtomicU64,
}

impl Sap {
    pub fn new(source: &impl AdjacencySource) -> Self {
        Sap {
            graph: CsrDigraph::from_source(source),
            memo: Mutex::new(FxHashMap::default()),
            hits: AtomicU64::new(0),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Length of the shortest ancestral path between `v` and `w`, or `None`
    /// if they share no common ancestor.
    pub fn length(&self, v: usize, w: usize) -> SapResult<Option<usize>> {
        Ok(self.find(v, w)?.map(|a| a.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path, or
    /// `None` if no such path exists.
    pub fn ancestor(&self, v: usize, w: usize) -> SapResult<Option<usize>> {
        Ok(self.find(v, w)?.map(|a| a.vertex))
    }

    /// Shortest ancestral path between `v` and `w` as one result.
    pub fn find(&self, v: usize, w: usize) -> SapResult<Option<Ancestor>> {
        self.resolve(&[v], &[w])
    }

    /// Length of the shortest ancestral path between any vertex in `vs` and
    /// any vertex in `ws`.
    pub fn length_of_sets(&self, vs: &[usize], ws: &[usize]) -> SapResult<Option<usize>> {
        Ok(self.find_sets(vs, ws)?.map(|a| a.length))
    }

    /// A common ancestor on a shortest ancestral path between the two sets.
    pub fn ancestor_of_sets(&self, vs: &[usize], ws: &[usize]) -> SapResult<Option<usize>> {
        Ok(self.find_sets(vs, ws)?.map(|a| a.vertex))
    }

    /// Shortest ancestral path between the two vertex sets as one result.
    pub fn find_sets(&self, vs: &[usize], ws: &[usize]) -> SapResult<Option<Ancestor>> {
        self.resolve(vs, ws)
    }

    /// Number of memoized query results (forward and swapped keys count
    /// separately).
    pub fn memo_len(&self) -> usize {
        self.memo.lock().len()
    }

    /// Number of queries answered from the memo instead of by traversal.
    pub fn cache_hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    fn resolve(&self, vs: &[usize], ws: &[usize]) -> SapResult<Option<Ancestor>> {
        self.check_side(vs)?;
        self.check_side(ws)?;

        let key = SapKey(canonical_side(vs), canonical_side(ws));

        // The whole lookup-compute-insert sequence is one critical section,
        // so concurrent callers never recompute the same key.
        let mut memo = self.memo.lock();
        if let Some(&cached) = memo.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(cached);
        }

        debug!(v_side = key.0.len(), w_side = key.1.len(), "sap memo miss");
        let result = self.traverse(&key.0, &key.1);
        memo.insert(SapKey(key.1.clone(), key.0.clone()), result);
        memo.insert(key, result);
        Ok(result)
    }

    /// Two fresh BFS runs, then an ascending scan over all vertices. The
    /// strict minimum means the lowest-id vertex wins ties, which callers
    /// rely on for determinism.
    fn traverse(&self, vs: &[usize], ws: &[usize]) -> Option<Ancestor> {
        let bfs_v = BfsDistances::run(&self.graph, vs);
        let bfs_w = BfsDistances::run(&self.graph, ws);

        let mut best: Option<Ancestor> = None;
        for x in 0..self.graph.vertex_count() {
            if let (Some(dv), Some(dw)) = (bfs_v.dist_to(x), bfs_w.dist_to(x)) {
                let length = dv + dw;
                if best.map_or(true, |b| length < b.length) {
                    best = Some(Ancestor { vertex: x, length });
                }
            }
        }
        best
    }

    fn check_side(&self, side: &[usize]) -> SapResult<()> {
        if side.is_empty() {
            return Err(SapError::EmptySet);
        }
        let bound = self.graph.vertex_count();
        for &vertex in side {
            if vertex >= bound {
                return Err(SapError::VertexOutOfBounds { vertex, bound });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::Digraph;

    /// 1 -> 0, 2 -> 0, 3 -> 1, 4 -> 1
    fn sample_graph() -> Digraph {
        let mut g = Digraph::with_vertices(5);
        for (v, w) in [(1, 0), (2, 0), (3, 1), (4, 1)] {
            g.add_edge(v, w).unwrap();
        }
        g
    }

    #[test]
    fn siblings_meet_at_parent() {
        let sap = Sap::new(&sample_graph());
        assert_eq!(sap.length(3, 4).unwrap(), Some(2));
        assert_eq!(sap.ancestor(3, 4).unwrap(), Some(1));
    }

    #[test]
    fn cousins_meet_at_root() {
        let sap = Sap::new(&sample_graph());
        assert_eq!(sap.length(1, 2).unwrap(), Some(2));
        assert_eq!(sap.ancestor(1, 2).unwrap(), Some(0));
    }

    #[test]
    fn vertex_is_its_own_ancestor() {
        let sap = Sap::new(&sample_graph());
        for v in 0..5 {
            assert_eq!(sap.find(v, v).unwrap(), Some(Ancestor { vertex: v, length: 0 }));
        }
    }

    #[test]
    fn queries_are_symmetric() {
        let sap = Sap::new(&sample_graph());
        for v in 0..5 {
            for w in 0..5 {
                assert_eq!(sap.find(v, w).unwrap(), sap.find(w, v).unwrap());
            }
        }
    }

    #[test]
    fn set_query_takes_minimum_over_pairs() {
        let sap = Sap::new(&sample_graph());
        let found = sap.find_sets(&[3, 4], &[2]).unwrap();
        assert_eq!(found, Some(Ancestor { vertex: 0, length: 3 }));
        assert_eq!(sap.length_of_sets(&[2], &[3, 4]).unwrap(), Some(3));
        assert_eq!(sap.ancestor_of_sets(&[2], &[3, 4]).unwrap(), Some(0));
    }

    #[test]
    fn disconnected_vertices_have_no_ancestor() {
        let g = Digraph::with_vertices(2);
        let sap = Sap::new(&g);
        assert_eq!(sap.length(0, 1).unwrap(), None);
        assert_eq!(sap.ancestor(0, 1).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_vertex_is_an_error() {
        let sap = Sap::new(&sample_graph());
        assert_eq!(
            sap.length(0, 5),
            Err(SapError::VertexOutOfBounds { vertex: 5, bound: 5 })
        );
        assert_eq!(
            sap.find_sets(&[0], &[1, 9]),
            Err(SapError::VertexOutOfBounds { vertex: 9, bound: 5 })
        );
    }

    #[test]
    fn empty_set_is_an_error() {
        let sap = Sap::new(&sample_graph());
        assert_eq!(sap.find_sets(&[], &[0]), Err(SapError::EmptySet));
        assert_eq!(sap.find_sets(&[0], &[]), Err(SapError::EmptySet));
    }

    #[test]
    fn all_queries_fail_on_empty_graph() {
        let sap = Sap::new(&Digraph::with_vertices(0));
        assert_eq!(
            sap.length(0, 0),
            Err(SapError::VertexOutOfBounds { vertex: 0, bound: 0 })
        );
    }

    #[test]
    fn repeated_query_is_served_from_memo() {
        let sap = Sap::new(&sample_graph());

        let first = sap.find(3, 4).unwrap();
        assert_eq!(sap.cache_hits(), 0);
        assert_eq!(sap.memo_len(), 2); // forward + swapped key

        let second = sap.find(3, 4).unwrap();
        let swapped = sap.find(4, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, swapped);
        assert_eq!(sap.cache_hits(), 2);
        assert_eq!(sap.memo_len(), 2);
    }

    #[test]
    fn scalar_and_singleton_set_share_a_memo_entry() {
        let sap = Sap::new(&sample_graph());
        sap.find(3, 4).unwrap();
        assert_eq!(sap.find_sets(&[4], &[3]).unwrap(), sap.find(3, 4).unwrap());
        assert!(sap.cache_hits() >= 1);
    }

    #[test]
    fn overlapping_sets_are_distinct_queries() {
        let sap = Sap::new(&sample_graph());
        sap.find_sets(&[3, 4], &[2]).unwrap();
        sap.find_sets(&[3], &[2]).unwrap();
        assert_eq!(sap.cache_hits(), 0);
        assert_eq!(sap.memo_len(), 4);
    }

    #[test]
    fn engine_is_immune_to_later_source_mutation() {
        let mut g = sample_graph();
        let sap = Sap::new(&g);
        g.add_edge(0, 4).unwrap();

        // With the original edges, 0 and 4 only meet at 0 (4 -> 1 -> 0).
        assert_eq!(sap.find(0, 4).unwrap(), Some(Ancestor { vertex: 0, length: 2 }));
    }

    #[test]
    fn cycles_are_supported() {
        // 0 -> 1 -> 2 -> 0, plus 3 -> 1
        let mut g = Digraph::with_vertices(4);
        for (v, w) in [(0, 1), (1, 2), (2, 0), (3, 1)] {
            g.add_edge(v, w).unwrap();
        }
        let sap = Sap::new(&g);

        // 3 reaches 1 in one hop; 0 reaches 1 in one hop.
        assert_eq!(sap.find(0, 3).unwrap(), Some(Ancestor { vertex: 1, length: 2 }));
    }

    #[test]
    fn ties_break_to_the_lowest_vertex_id() {
        // 2 -> 0, 2 -> 1, 3 -> 0, 3 -> 1: ancestors 0 and 1 both at sum 2.
        let mut g = Digraph::with_vertices(4);
        for (v, w) in [(2, 0), (2, 1), (3, 0), (3, 1)] {
            g.add_edge(v, w).unwrap();
        }
        let sap = Sap::new(&g);
        assert_eq!(sap.find(2, 3).unwrap(), Some(Ancestor { vertex: 0, length: 2 }));
    }
}
