//! The WordNet lexical database: a noun index over a hypernym digraph.

mod loader;
mod outcast;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;

use lexigraph_sap::{Sap, SapError};

pub use outcast::Outcast;

/// Errors that can occur while loading or querying the database.
#[derive(Error, Debug)]
pub enum WordNetError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed record: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("hypernym graph is not singly rooted ({roots} vertices have no hypernym)")]
    NotRootedDag { roots: usize },

    #[error("'{0}' is not a WordNet noun")]
    UnknownNoun(String),

    #[error(transparent)]
    Sap(#[from] SapError),
}

pub type WordNetResult<T> = Result<T, WordNetError>;

/// An immutable WordNet database.
///
/// Built from the two-file format of the WordNet distribution: a synsets
/// file (`id,nouns,gloss` per line, nouns space-separated) and a hypernyms
/// file (`id,hypernym-id,...` per line). A noun may belong to several
/// synsets; noun queries are set queries against the SAP engine.
#[derive(Debug)]
pub struct WordNet {
    /// noun -> synset ids containing it, in file order.
    nouns: IndexMap<String, Vec<usize>>,
    /// synset id -> synset string.
    synsets: FxHashMap<usize, String>,
    sap: Sap,
}

impl WordNet {
    /// Load the database from a synsets file and a hypernyms file.
    ///
    /// Fails if either file is unreadable or malformed, or if the hypernym
    /// graph does not have exactly one root (a synset with no hypernym).
    pub fn from_files(
        synsets: impl AsRef<Path>,
        hypernyms: impl AsRef<Path>,
    ) -> WordNetResult<Self> {
        let db = loader::load(synsets.as_ref(), hypernyms.as_ref())?;
        Ok(WordNet {
            nouns: db.nouns,
            synsets: db.synsets,
            sap: Sap::new(&db.graph),
        })
    }

    /// All nouns in the database, in file order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// Is `word` a WordNet noun?
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Number of synsets in the database.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Semantic distance between two nouns: the length of the shortest
    /// ancestral path between any synset of `noun_a` and any synset of
    /// `noun_b`. `None` means the synsets share no common ancestor.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> WordNetResult<Option<usize>> {
        let a = self.synset_ids(noun_a)?;
        let b = self.synset_ids(noun_b)?;
        Ok(self.sap.length_of_sets(a, b)?)
    }

    /// The synset that is the shortest common ancestor of the two nouns.
    pub fn sca(&self, noun_a: &str, noun_b: &str) -> WordNetResult<Option<&str>> {
        let a = self.synset_ids(noun_a)?;
        let b = self.synset_ids(noun_b)?;
        let ancestor = self.sap.ancestor_of_sets(a, b)?;
        Ok(ancestor.and_then(|id| self.synsets.get(&id).map(String::as_str)))
    }

    fn synset_ids(&self, noun: &str) -> WordNetResult<&[usize]> {
        self.nouns
            .get(noun)
            .map(Vec::as_slice)
            .ok_or_else(|| WordNetError::UnknownNoun(noun.to_string()))
    }
}
