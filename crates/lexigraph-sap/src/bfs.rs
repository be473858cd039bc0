//! Multi-source breadth-first search over directed edges.

use std::collections::VecDeque;

use crate::digraph::CsrDigraph;

/// Shortest-path distances from a fixed source set, computed by one BFS
/// sweep.
///
/// Every source starts at distance 0 and each vertex is enqueued at most
/// once, so the first discovery of a vertex records its shortest distance
/// and later arrivals never overwrite it. The discovery map is allocated
/// fresh per run; distances are a function of one specific source set and
/// must never leak into another query.
#[derive(Debug)]
pub(crate) struct BfsDistances {
    dist: Vec<Option<usize>>,
}

impl BfsDistances {
    /// Run a BFS from every vertex in `sources`.
    ///
    /// Callers must have bounds-checked `sources` against the graph.
    pub(crate) fn run(graph: &CsrDigraph, sources: &[usize]) -> Self {
        let mut dist: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let mut frontier = VecDeque::with_capacity(sources.len());

        for &s in sources {
            if dist[s].is_none() {
                dist[s] = Some(0);
                frontier.push_back((s, 0));
            }
        }

        while let Some((v, d)) = frontier.pop_front() {
            for &w in graph.successors(v) {
                if dist[w].is_none() {
                    dist[w] = Some(d + 1);
                    frontier.push_back((w, d + 1));
                }
            }
        }

        BfsDistances { dist }
    }

    pub(crate) fn has_path_to(&self, x: usize) -> bool {
        self.dist[x].is_some()
    }

    pub(crate) fn dist_to(&self, x: usize) -> Option<usize> {
        self.dist[x]
    }
}
