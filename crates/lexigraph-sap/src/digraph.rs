//! Directed graph storage.
//!
//! [`Digraph`] is the mutable adjacency-list structure callers build edges
//! into; [`AdjacencySource`] is the read-only seam the SAP engine copies
//! from at construction. The engine's own copy is kept in Compressed Sparse
//! Row (CSR) form so a vertex's successors are one contiguous slice.

use thiserror::Error;

/// Errors that can occur while building a digraph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a digraph with {bound} vertices")]
    VertexOutOfBounds { vertex: usize, bound: usize },
}

/// Read-only view of a directed graph over dense vertices `0..V`.
///
/// Anything exposing a vertex count and per-vertex successor slices can seed
/// the SAP engine; the engine enumerates it exactly once, at construction,
/// and never retains a reference to it.
pub trait AdjacencySource {
    fn vertex_count(&self) -> usize;

    /// Vertices directly reachable from `v` via one edge, in any order.
    fn successors(&self, v: usize) -> &[usize];
}

/// A directed graph over vertices `0..V` with adjacency-list storage.
///
/// Self-loops and parallel edges are allowed; both are harmless to BFS,
/// which discovers each vertex at most once.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Digraph {
    /// Create a digraph with `v` vertices and no edges.
    pub fn with_vertices(v: usize) -> Self {
        Digraph { adj: vec![Vec::new(); v], edge_count: 0 }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `v -> w`.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        let bound = self.adj.len();
        for vertex in [v, w] {
            if vertex >= bound {
                return Err(GraphError::VertexOutOfBounds { vertex, bound });
            }
        }
        self.adj[v].push(w);
        self.edge_count += 1;
        Ok(())
    }

    /// Vertices directly reachable from `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count()`.
    pub fn successors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }
}

impl AdjacencySource for Digraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn successors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }
}

impl AdjacencySource for Vec<Vec<usize>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn successors(&self, v: usize) -> &[usize] {
        &self[v]
    }
}

/// Immutable CSR copy of an [`AdjacencySource`], owned by the SAP engine.
///
/// `offsets` has `V + 1` entries; the successors of `v` live in
/// `targets[offsets[v]..offsets[v + 1]]`.
#[derive(Debug, Clone)]
pub(crate) struct CsrDigraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

impl CsrDigraph {
    pub(crate) fn from_source(source: &impl AdjacencySource) -> Self {
        let v = source.vertex_count();
        let mut offsets = Vec::with_capacity(v + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for vertex in 0..v {
            targets.extend_from_slice(source.successors(vertex));
            offsets.push(targets.len());
        }

        CsrDigraph { offsets, targets }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub(crate) fn successors(&self, v: usize) -> &[usize] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }
}
