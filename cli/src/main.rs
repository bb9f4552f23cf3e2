//! Graphrank CLI — PageRank over CSV node/edge files
//!
//! Loads a directed graph from a node file and an edge file, runs the
//! fixed-iteration PageRank and prints the rank report.

use clap::Parser;
use graphrank::graph::DirectedGraph;
use graphrank::{page_rank, read_graph_from_csv, write_ranks, PageRankConfig};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphrank", version, about = "PageRank over CSV node/edge files")]
struct Cli {
    /// Node file: header `id,attr...`, one node per row
    node_file: PathBuf,

    /// Edge file: header `src,dst,attr...`, one edge per row
    edge_file: PathBuf,

    /// Number of PageRank iterations
    #[arg(default_value_t = 40)]
    iterations: usize,

    /// Maximum number of nodes to list in the report
    #[arg(long, default_value_t = 20)]
    max_nodes: usize,

    /// Emit the raw rank mapping as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let graph: DirectedGraph<String> = read_graph_from_csv(&cli.node_file, &cli.edge_file)?;
    let ranks = page_rank(&graph, PageRankConfig::with_iterations(cli.iterations));

    if cli.json {
        // sorted map so the JSON output is deterministic too
        let ordered: BTreeMap<&String, f64> = ranks.iter().map(|(id, &r)| (id, r)).collect();
        println!("{}", serde_json::to_string_pretty(&ordered)?);
    } else {
        write_ranks(&mut std::io::stdout().lock(), &ranks, cli.max_nodes)?;
    }
    Ok(())
}
