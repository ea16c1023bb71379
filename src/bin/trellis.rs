use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use trellis::{BfsReport, DfsReport, EdgeFlag, GhostToken, Graph};

#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Run BFS or DFS over a JSON adjacency matrix", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Breadth-first search from one source vertex
    Bfs {
        /// Source vertex
        #[arg(short, long)]
        source: usize,

        /// JSON adjacency matrix; read from stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Depth-first forest over every vertex
    Dfs {
        /// JSON adjacency matrix; read from stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fail unless every pair of DFS intervals is nested or disjoint
        #[arg(long, default_value_t = false)]
        verify: bool,
    },
}

/// The five-vertex undirected graph used when nothing is piped in.
const SAMPLE: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 1],
    [1, 0, 1, 1, 1],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 0, 1],
    [1, 1, 0, 1, 0],
];

/// A matrix entry: `true`/`false` or an integer, nonzero meaning an edge.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
enum Entry {
    Flag(bool),
    Count(i64),
}

impl EdgeFlag for Entry {
    fn is_edge(self) -> bool {
        match self {
            Entry::Flag(b) => b,
            Entry::Count(c) => c != 0,
        }
    }
}

type Matrix = Vec<Vec<Entry>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bfs { source, input } => {
            let matrix = load_matrix(input.as_deref())?;
            let report = run_bfs(&matrix, source)?;
            print_json(&report)
        }
        Commands::Dfs { input, verify } => {
            let matrix = load_matrix(input.as_deref())?;
            let report = run_dfs(&matrix, verify)?;
            print_json(&report)
        }
    }
}

fn run_bfs(matrix: &[Vec<Entry>], source: usize) -> Result<BfsReport> {
    GhostToken::new(|mut token| {
        let graph = Graph::from_matrix(matrix).context("Invalid adjacency matrix")?;
        let report = graph
            .bfs_report(&mut token, source)
            .with_context(|| format!("BFS from {source} failed"))?;
        tracing::info!(
            source,
            reached = report.order.len(),
            unreached = report.unreached().len(),
            "bfs complete"
        );
        Ok(report)
    })
}

fn run_dfs(matrix: &[Vec<Entry>], verify: bool) -> Result<DfsReport> {
    GhostToken::new(|mut token| {
        let graph = Graph::from_matrix(matrix).context("Invalid adjacency matrix")?;
        let report = graph.dfs_report(&mut token);
        tracing::info!(vertices = report.order.len(), trees = report.tree_count(), "dfs complete");
        if verify {
            report.check_brackets().context("DFS bracket check failed")?;
            tracing::info!("bracket property holds");
        }
        Ok(report)
    })
}

fn sample_matrix() -> Matrix {
    SAMPLE
        .iter()
        .map(|row| row.iter().map(|&x| Entry::Count(i64::from(x))).collect())
        .collect()
}

fn load_matrix(input: Option<&Path>) -> Result<Matrix> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None if io::stdin().is_terminal() => {
            tracing::info!("no input given, using the built-in sample graph");
            return Ok(sample_matrix());
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read adjacency matrix from stdin")?;
            buf
        }
    };

    parse_matrix(&text)
}

fn parse_matrix(text: &str) -> Result<Matrix> {
    serde_json::from_str(text).context("Adjacency matrix must be a JSON array of arrays of integers or booleans")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis::GraphError;

    #[test]
    fn entries_mix_booleans_and_integers() {
        let matrix = parse_matrix("[[true, 0], [1, false]]").unwrap();
        assert_eq!(
            matrix,
            vec![
                vec![Entry::Flag(true), Entry::Count(0)],
                vec![Entry::Count(1), Entry::Flag(false)],
            ]
        );

        GhostToken::new(|_token| {
            let graph = Graph::from_matrix(&matrix).unwrap();
            assert!(graph.has_edge(0, 0).unwrap());
            assert!(!graph.has_edge(0, 1).unwrap());
            assert!(graph.has_edge(1, 0).unwrap());

            let ragged = parse_matrix("[[0, 1], [1]]").unwrap();
            let err = Graph::from_matrix(&ragged).err();
            assert_eq!(
                err,
                Some(GraphError::NotSquare {
                    row: 1,
                    len: 1,
                    expected: 2
                })
            );
        });
    }

    #[test]
    fn negative_entries_are_edges() {
        let matrix = parse_matrix("[[0, -1], [0, 0]]").unwrap();
        assert!(matrix[0][1].is_edge());
        assert!(!matrix[1][0].is_edge());
    }

    #[test]
    fn non_integer_entries_are_rejected() {
        let err = parse_matrix("[[0.5]]").unwrap_err();
        assert!(err.to_string().contains("integers or booleans"));
        assert!(parse_matrix("[[\"1\"]]").is_err());
        assert!(parse_matrix("[0, 1]").is_err());
    }

    #[test]
    fn sample_graph_runs_both_traversals() {
        let matrix = sample_matrix();

        let bfs = run_bfs(&matrix, 3).unwrap();
        assert_eq!(bfs.order, vec![3, 1, 2, 4, 0]);
        assert!(bfs.unreached().is_empty());

        let dfs = run_dfs(&matrix, true).unwrap();
        assert_eq!(dfs.order, vec![4, 3, 2, 1, 0]);
        assert_eq!(dfs.roots, vec![0]);
    }

    #[test]
    fn out_of_range_source_carries_context() {
        let err = run_bfs(&sample_matrix(), 5).unwrap_err();
        assert_eq!(err.to_string(), "BFS from 5 failed");
        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::InvalidSource {
                vertex: 5,
                vertex_count: 5
            })
        );
    }

    #[test]
    fn ragged_input_fails_before_traversal() {
        let ragged = parse_matrix("[[0, 1, 0], [1, 0]]").unwrap();
        let err = run_dfs(&ragged, true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid adjacency matrix");
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["trellis", "dfs", "--verify"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Dfs {
                input: None,
                verify: true
            }
        );

        let cli = Cli::try_parse_from(["trellis", "bfs", "-s", "3", "--input", "graph.json"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Bfs {
                source: 3,
                input: Some(PathBuf::from("graph.json"))
            }
        );

        assert!(Cli::try_parse_from(["trellis", "bfs"]).is_err());
        assert!(Cli::try_parse_from(["trellis", "bfs", "--source", "-1"]).is_err());
    }
}
