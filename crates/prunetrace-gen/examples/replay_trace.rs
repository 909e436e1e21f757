use std::path::PathBuf;

use anyhow::{Context, Result};
use prunetrace_core::{Replay, SearchStats, TraceSnapshot, format_score, search};
use prunetrace_gen::{GeneratorConfig, TreeGenerator};
use tracing::info;

/// Usage: replay_trace [generator.yaml] [--json]
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config_path: Option<PathBuf> = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    let config = match &config_path {
        Some(path) => GeneratorConfig::from_yaml_path(path)
            .with_context(|| format!("failed to load generator config {}", path.display()))?,
        None => GeneratorConfig::from_default_yaml()?,
    };
    info!(
        depth = config.depth,
        branching_factor = config.branching_factor,
        seed = ?config.seed,
        "generating tree"
    );

    let root = TreeGenerator::new(config)?.generate()?;
    let outcome = search(&root)?;

    if json {
        let snapshot = TraceSnapshot::capture(&root, &outcome);
        println!("{}", snapshot.to_json_pretty()?);
        return Ok(());
    }

    let mut replay = Replay::new(&outcome.log)?;
    loop {
        let event = replay.current();
        println!(
            "{:>4}  {:<13} {:<12} alpha={:<5} beta={:<5} value={:<5} {}",
            replay.step(),
            event.kind.as_str(),
            event.node_id,
            format_score(event.alpha),
            format_score(event.beta),
            event.value.map(format_score).unwrap_or_else(|| "-".to_string()),
            event.description
        );
        if !replay.next() {
            break;
        }
    }

    let stats = SearchStats::from_log(&outcome.log);
    info!(
        value = outcome.value,
        visited = stats.nodes_visited,
        prunes = stats.prunes,
        pruned_children = stats.pruned_children,
        "search complete"
    );
    Ok(())
}
