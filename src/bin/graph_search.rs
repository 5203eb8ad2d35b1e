use adjgraph::{AdjacencyGraph, GraphSnapshot, SearchConfig, SearchOutcome, TraversalKind};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "graph_search")]
#[command(about = "Build an undirected graph and search it breadth-first or depth-first")]
#[command(long_about = None)]
struct Cli {
    /// JSON snapshot: {"vertices": [..], "edges": [[u, v], ..]}. Defaults to a small sample graph
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Vertex to start from
    #[arg(long, default_value_t = 1)]
    start: i64,

    /// Vertex to look for
    #[arg(long, default_value_t = 6)]
    target: i64,

    /// Which strategy to run
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Do not expand vertices this many edges from the start
    #[arg(long)]
    max_depth: Option<usize>,

    /// Remove edge U,V before searching (repeatable)
    #[arg(long, value_name = "U,V", value_parser = parse_edge)]
    remove_edge: Vec<(i64, i64)>,

    /// Remove vertex V before searching (repeatable)
    #[arg(long, value_name = "V")]
    remove_vertex: Vec<i64>,

    /// Print the adjacency list and statistics
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Emit search reports as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Both,
}

impl StrategyArg {
    fn kinds(self) -> &'static [TraversalKind] {
        match self {
            StrategyArg::Bfs => &[TraversalKind::BreadthFirst],
            StrategyArg::Dfs => &[TraversalKind::DepthFirst],
            StrategyArg::Both => &[TraversalKind::BreadthFirst, TraversalKind::DepthFirst],
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    strategy: TraversalKind,
    start: i64,
    target: i64,
    outcome: &'a SearchOutcome<i64>,
}

fn parse_edge(s: &str) -> Result<(i64, i64), String> {
    let (u, v) = s
        .split_once(',')
        .ok_or_else(|| format!("expected U,V but got '{s}'"))?;
    let parse = |x: &str| {
        x.trim()
            .parse::<i64>()
            .map_err(|e| format!("bad vertex '{x}': {e}"))
    };
    Ok((parse(u)?, parse(v)?))
}

fn sample_graph() -> AdjacencyGraph<i64> {
    //      1
    //     / \
    //    2   3
    //   / \   \
    //  4   5---6
    AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (5, 6)])
}

fn load_graph(path: Option<&PathBuf>) -> Result<AdjacencyGraph<i64>> {
    let Some(path) = path else {
        tracing::info!("No --graph given, using the built-in sample graph");
        return Ok(sample_graph());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let snapshot: GraphSnapshot<i64> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse graph snapshot {}", path.display()))?;
    Ok(AdjacencyGraph::from_snapshot(snapshot))
}

fn print_graph(graph: &AdjacencyGraph<i64>) {
    print!("{graph}");
    let stats = graph.statistics();
    println!(
        "{} vertices, {} edges, degree min/median/max {}/{}/{}, average {:.2}",
        stats.vertex_count,
        stats.edge_count,
        stats.min_degree,
        stats.median_degree,
        stats.max_degree,
        stats.average_degree
    );
}

fn format_vertices(vertices: &[i64]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut graph = load_graph(cli.graph.as_ref())?;

    for (u, v) in &cli.remove_edge {
        if !graph.remove_edge(u, v) {
            tracing::warn!(u, v, "Edge not present, nothing removed");
        }
    }
    for v in &cli.remove_vertex {
        if !graph.remove_vertex(v) {
            tracing::warn!(v, "Vertex not present, nothing removed");
        }
    }

    if cli.print {
        print_graph(&graph);
    }

    let config = SearchConfig {
        max_depth: cli.max_depth,
    };

    for &kind in cli.strategy.kinds() {
        let outcome = kind.search(&graph, &cli.start, &cli.target, &config);
        if cli.json {
            let report = Report {
                strategy: kind,
                start: cli.start,
                target: cli.target,
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string(&report)?);
            continue;
        }

        println!("{kind} search {} -> {}:", cli.start, cli.target);
        println!("  visited: {}", format_vertices(&outcome.visit_order));
        match &outcome.path {
            Some(path) => println!(
                "  found via {} ({} edges)",
                format_vertices(path),
                path.len().saturating_sub(1)
            ),
            None => println!("  not found"),
        }
    }

    Ok(())
}
