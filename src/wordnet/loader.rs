//! Parsing of the two-file WordNet distribution format.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::info;

use lexigraph_sap::Digraph;

use super::{WordNetError, WordNetResult};

pub(crate) struct LoadedDb {
    pub nouns: IndexMap<String, Vec<usize>>,
    pub synsets: FxHashMap<usize, String>,
    pub graph: Digraph,
}

pub(crate) fn load(synsets_path: &Path, hypernyms_path: &Path) -> WordNetResult<LoadedDb> {
    let mut nouns: IndexMap<String, Vec<usize>> = IndexMap::new();
    let mut synsets: FxHashMap<usize, String> = FxHashMap::default();

    for (line_no, line) in read_lines(synsets_path)? {
        // id,space-separated nouns,gloss — the gloss may itself contain
        // commas, so split at most twice.
        let mut fields = line.splitn(3, ',');
        let (Some(id), Some(synset)) = (fields.next(), fields.next()) else {
            return Err(parse_error(synsets_path, line_no, "expected 'id,synset,...'"));
        };
        let id = parse_id(id, synsets_path, line_no)?;

        for noun in synset.split_whitespace() {
            nouns.entry(noun.to_string()).or_default().push(id);
        }
        synsets.insert(id, synset.to_string());
    }

    let mut graph = Digraph::with_vertices(synsets.len());
    for (line_no, line) in read_lines(hypernyms_path)? {
        let mut fields = line.split(',');
        let Some(id) = fields.next() else {
            continue;
        };
        let id = parse_id(id, hypernyms_path, line_no)?;
        for hypernym in fields {
            let hypernym = parse_id(hypernym, hypernyms_path, line_no)?;
            graph.add_edge(id, hypernym).map_err(|e| {
                parse_error(hypernyms_path, line_no, &e.to_string())
            })?;
        }
    }

    check_rooted(&graph)?;

    info!(
        synsets = synsets.len(),
        nouns = nouns.len(),
        hypernym_edges = graph.edge_count(),
        "loaded wordnet database"
    );

    Ok(LoadedDb { nouns, synsets, graph })
}

/// The hypernym graph must have exactly one root: a synset with no
/// outgoing (hypernym) edge.
fn check_rooted(graph: &Digraph) -> WordNetResult<()> {
    let roots = (0..graph.vertex_count())
        .filter(|&v| graph.out_degree(v) == 0)
        .count();
    if roots != 1 {
        return Err(WordNetError::NotRootedDag { roots });
    }
    Ok(())
}

fn read_lines(path: &Path) -> WordNetResult<Vec<(usize, String)>> {
    let content = fs::read_to_string(path).map_err(|source| WordNetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l.to_string()))
        .collect())
}

fn parse_id(field: &str, path: &Path, line: usize) -> WordNetResult<usize> {
    field
        .trim()
        .parse()
        .map_err(|_| parse_error(path, line, &format!("invalid synset id '{field}'")))
}

fn parse_error(path: &Path, line: usize, reason: &str) -> WordNetError {
    WordNetError::Parse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
