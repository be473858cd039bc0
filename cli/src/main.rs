//! lexigraph CLI — shortest-ancestral-path and noun queries from the shell.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lexigraph::{Digraph, Outcast, Sap, WordNet};

#[derive(Parser)]
#[command(name = "lexigraph", version, about = "WordNet-style lexical database queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer shortest-ancestral-path queries against a digraph file
    ///
    /// The file holds a vertex-count line, an edge-count line, then one
    /// `tail,head` pair per edge. Vertex pairs are read from stdin and
    /// answered as `length = L, ancestor = A` (-1 when no path exists).
    Sap {
        /// Digraph description file
        graph: PathBuf,
    },
    /// Distance and shortest common ancestor of two nouns
    Distance {
        synsets: PathBuf,
        hypernyms: PathBuf,
        noun_a: String,
        noun_b: String,
    },
    /// Print the outcast of each file of nouns
    Outcast {
        synsets: PathBuf,
        hypernyms: PathBuf,
        /// Files of whitespace-separated nouns
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sap { graph } => run_sap(&graph),
        Commands::Distance { synsets, hypernyms, noun_a, noun_b } => {
            run_distance(&synsets, &hypernyms, &noun_a, &noun_b)
        }
        Commands::Outcast { synsets, hypernyms, files } => {
            run_outcast(&synsets, &hypernyms, &files)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_sap(path: &Path) -> Result<()> {
    let graph = read_digraph(path)?;
    let sap = Sap::new(&graph);

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        let mut fields = line.split_whitespace();
        let (Some(v), Some(w)) = (fields.next(), fields.next()) else {
            continue;
        };
        let v: usize = v.parse().with_context(|| format!("invalid vertex '{v}'"))?;
        let w: usize = w.parse().with_context(|| format!("invalid vertex '{w}'"))?;

        match sap.find(v, w)? {
            Some(a) => println!("length = {}, ancestor = {}", a.length, a.vertex),
            None => println!("length = -1, ancestor = -1"),
        }
    }
    Ok(())
}

fn run_distance(synsets: &Path, hypernyms: &Path, noun_a: &str, noun_b: &str) -> Result<()> {
    let wordnet = WordNet::from_files(synsets, hypernyms)?;

    match wordnet.distance(noun_a, noun_b)? {
        Some(d) => println!("distance = {d}"),
        None => println!("distance = -1"),
    }
    match wordnet.sca(noun_a, noun_b)? {
        Some(synset) => println!("sca = {synset}"),
        None => println!("sca = none"),
    }
    Ok(())
}

fn run_outcast(synsets: &Path, hypernyms: &Path, files: &[PathBuf]) -> Result<()> {
    let wordnet = WordNet::from_files(synsets, hypernyms)?;
    let outcast = Outcast::new(&wordnet);

    for file in files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let nouns: Vec<String> = content.split_whitespace().map(str::to_string).collect();

        match outcast.outcast(&nouns)? {
            Some(noun) => println!("{}: {}", file.display(), noun),
            None => bail!("{} contains no nouns", file.display()),
        }
    }
    Ok(())
}

/// Parse a digraph file: vertex count, edge count, then `tail,head` pairs.
/// Comma- and whitespace-separated pairs are both accepted.
fn read_digraph(path: &Path) -> Result<Digraph> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut tokens = content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let mut next_int = |what: &str| -> Result<usize> {
        let token = tokens.next().with_context(|| format!("missing {what}"))?;
        token.parse().with_context(|| format!("invalid {what} '{token}'"))
    };

    let vertices = next_int("vertex count")?;
    let edges = next_int("edge count")?;

    let mut graph = Digraph::with_vertices(vertices);
    for _ in 0..edges {
        let tail = next_int("edge tail")?;
        let head = next_int("edge head")?;
        graph.add_edge(tail, head)?;
    }
    Ok(graph)
}
