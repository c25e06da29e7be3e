use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use pantry_cli::AppConfig;
use pantry_inventory::{SortDirection, SortField};

/// Derive inventory dashboard view-models from a JSON snapshot.
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "PANTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Snapshot file; stdin when omitted
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Table sort column (e.g. current_stock)
    #[arg(long)]
    sort_field: Option<SortField>,

    /// Table sort direction (asc | desc)
    #[arg(long)]
    sort_direction: Option<SortDirection>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    pantry_observability::init_with_default(if args.verbose { "debug" } else { "info" });

    let config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    }
    .with_sort_overrides(args.sort_field, args.sort_direction);

    let raw = read_snapshot(args.snapshot.as_deref())?;
    let snapshot = pantry_cli::parse_snapshot(&raw)?;
    let document = pantry_cli::derive(&config, &snapshot)?;

    println!("{}", pantry_cli::render(&document, args.pretty)?);
    Ok(())
}

fn read_snapshot(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read snapshot from stdin")?;
            Ok(raw)
        }
    }
}
