//! lexigraph — a WordNet-style lexical database.
//!
//! Synsets (sets of synonymous nouns) form the vertices of a hypernym
//! digraph; semantic relatedness of two nouns is the length of the shortest
//! ancestral path between their synsets. The path engine itself lives in
//! the [`lexigraph_sap`] crate and is re-exported here.
//!
//! # Example
//!
//! ```no_run
//! use lexigraph::WordNet;
//!
//! let wn = WordNet::from_files("synsets.txt", "hypernyms.txt")?;
//! if let Some(d) = wn.distance("worm", "bird")? {
//!     println!("worm and bird are {d} hops apart");
//! }
//! # Ok::<(), lexigraph::WordNetError>(())
//! ```

pub mod wordnet;

pub use wordnet::{Outcast, WordNet, WordNetError, WordNetResult};

pub use lexigraph_sap::{AdjacencySource, Ancestor, Digraph, Sap, SapError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
