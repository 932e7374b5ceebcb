//! Command-line front end: shortest paths from one vertex of a labelled DAG.
//!
//! Runs the CLRS figure 24.5 graph unless `--graph` names a JSON description
//! (see `dagpath::config`).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dagpath::{GraphConfig, ShortestPathSolver};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "dagpath",
    version,
    about = "Single-source shortest paths in a weighted directed acyclic graph"
)]
struct Cli {
    /// JSON graph description; defaults to the CLRS figure 24.5 graph
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Label of the source vertex (overrides the graph file)
    #[arg(short, long)]
    source: Option<String>,

    /// Label of the vertex whose path is printed (overrides the graph file)
    #[arg(short, long)]
    target: Option<String>,

    /// Print the full result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.graph {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            GraphConfig::from_json(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => GraphConfig::clrs_figure_24_5(),
    };

    let source_label = cli
        .source
        .or_else(|| config.source.clone())
        .unwrap_or_else(|| config.labels.label(0));
    let source = config.resolve(&source_label)?;

    let solver = ShortestPathSolver::new(&config.matrix).context("Graph is not a DAG")?;
    let paths = solver.solve(source)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    println!("Single-source shortest paths in a directed acyclic graph");

    if let Some(target_label) = cli.target.or_else(|| config.target.clone()) {
        let target = config.resolve(&target_label)?;
        println!(
            "Path from {} to {}:",
            config.labels.label(source),
            config.labels.label(target)
        );
        for line in paths.path_to(target)?.render(&config.labels, source, target) {
            println!("{line}");
        }
    }

    println!();
    println!("All vertices:");
    for line in paths.render_table(&config.labels) {
        println!("{line}");
    }

    Ok(())
}
