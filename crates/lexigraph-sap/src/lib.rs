//! Shortest-ancestral-path queries over directed graphs.
//!
//! An *ancestral path* between vertices `v` and `w` is a directed path from
//! `v` to some vertex `x` together with a directed path from `w` to the same
//! `x`. The [`Sap`] engine answers repeated queries for the shortest such
//! path (and the vertex achieving it), for single vertices and for vertex
//! sets, memoizing results over an immutable copy of the input graph.

pub mod digraph;
pub mod sap;

mod bfs;

pub use digraph::{AdjacencySource, Digraph, GraphError};
pub use sap::{Ancestor, Sap, SapError, SapResult};
