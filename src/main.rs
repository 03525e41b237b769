use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use page_merge::logging;
use page_merge::shared::config::CONFIG;
use page_merge::{Addressing, MemorySource, MergeMode, PageMerge, SharedSource};
use serde_json::Value;
use tracing::info;

/// Merge one page out of several JSON-array sources.
#[derive(Debug, Parser)]
#[command(name = "page_merge", version)]
struct Cli {
    /// Source as NAME=PATH, where PATH holds a JSON array. Repeat in display order.
    #[arg(long = "source", value_parser = parse_source, required = true)]
    sources: Vec<SourceArg>,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Defaults to merge.page_size from the config file.
    #[arg(long)]
    page_size: Option<usize>,

    /// Over-fetch to cover page boundaries that land mid-source.
    #[arg(long)]
    padding: bool,

    /// sync or async
    #[arg(long, default_value = "async")]
    mode: MergeMode,

    /// How sources read their window: page or offset
    #[arg(long, default_value = "page")]
    addressing: Addressing,

    /// Artificial per-call latency for every source, in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[derive(Debug, Clone)]
struct SourceArg {
    name: String,
    path: PathBuf,
}

fn parse_source(raw: &str) -> Result<SourceArg, String> {
    let (name, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{}'", raw))?;
    if name.is_empty() {
        return Err("source name cannot be empty".to_string());
    }
    Ok(SourceArg {
        name: name.to_string(),
        path: PathBuf::from(path),
    })
}

fn load_source(
    arg: &SourceArg,
    addressing: Addressing,
    latency: Option<Duration>,
) -> anyhow::Result<SharedSource<Value>> {
    let file = File::open(&arg.path)
        .with_context(|| format!("opening source '{}' at {}", arg.name, arg.path.display()))?;
    let rows: Vec<Value> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("source '{}' must be a JSON array", arg.name))?;

    info!(source = %arg.name, rows = rows.len(), "Loaded source");

    let source = MemorySource::new(arg.name.clone(), rows, addressing);
    Ok(match latency {
        Some(latency) => Arc::new(source.with_latency(latency)),
        None => Arc::new(source),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let defaults = &CONFIG.merge;
    let latency = cli.latency_ms.map(Duration::from_millis);
    let sources = cli
        .sources
        .iter()
        .map(|arg| load_source(arg, cli.addressing, latency))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let merge = PageMerge::new(
        cli.page,
        cli.page_size.unwrap_or(defaults.page_size),
        sources,
    )
    .with_padding(cli.padding || defaults.padding_mode)
    .with_max_inflight(defaults.max_inflight);

    info!(mode = %cli.mode, request = ?merge.request(), "Running merge");
    let outcome = merge.merge(cli.mode).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
