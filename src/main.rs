mod input;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::input::{collect_score_summaries, load_raw_measurement, load_score_summary};
use crate::model::reference::ScoringConfig;
use crate::pipeline::compute_scores;
use crate::report::compare::build_comparison;
use crate::report::rank::build_rankings;
use crate::report::write_json;

#[derive(Debug, Parser)]
#[command(name = "vps-scorecard", version, about = "VPS benchmark scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize one raw measurement document into a score document.
    Score {
        /// Path to raw.json.
        #[arg(long)]
        input: PathBuf,
        /// Path the score.json is written to.
        #[arg(long)]
        output: PathBuf,
    },
    /// Generate per-profile leaderboards from many score documents.
    Rank {
        /// Directory containing one subdirectory per host, each holding a
        /// score.json.
        #[arg(long, default_value = "output")]
        input_dir: PathBuf,
        /// Path the ranking.json is written to.
        #[arg(long)]
        output: PathBuf,
    },
    /// Merge several score documents into a sorted comparison.
    Compare {
        /// Paths to score.json files; each id is its parent directory name.
        #[arg(long, num_args = 1.., required = true)]
        inputs: Vec<PathBuf>,
        /// Path the comparison JSON is written to.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Score { input, output } => run_score(&input, &output),
        Command::Rank { input_dir, output } => run_rank(&input_dir, &output),
        Command::Compare { inputs, output } => run_compare(&inputs, &output),
    }
}

fn run_score(input: &Path, output: &Path) -> Result<(), String> {
    let raw = load_raw_measurement(input).map_err(|e| e.to_string())?;
    let document = compute_scores(&raw, &ScoringConfig::default_v1());

    if document.meta.fallbacks.bandwidth_floor {
        warn!("bandwidth missing or non-positive; floor fallback applied");
    }
    if document.meta.fallbacks.cpu_estimated {
        warn!("cpu bench estimated from core count; not comparable with measured hosts");
    }

    write_json(output, &document).map_err(|e| e.to_string())?;
    info!(
        "scored {} -> {} (cpu source: {})",
        input.display(),
        output.display(),
        document.meta.cpu_info.source
    );
    Ok(())
}

fn run_rank(input_dir: &Path, output: &Path) -> Result<(), String> {
    let items = collect_score_summaries(input_dir).map_err(|e| e.to_string())?;
    if items.is_empty() {
        warn!("no score.json found under {}", input_dir.display());
    }
    let rankings = build_rankings(&items);
    write_json(output, &rankings).map_err(|e| e.to_string())?;
    info!("ranked {} hosts -> {}", items.len(), output.display());
    Ok(())
}

fn run_compare(inputs: &[PathBuf], output: &Path) -> Result<(), String> {
    let mut items = Vec::with_capacity(inputs.len());
    for path in inputs {
        let summary = load_score_summary(path).map_err(|e| e.to_string())?;
        items.push((input::score_document_id(path), summary));
    }
    let comparison = build_comparison(items);
    write_json(output, &comparison).map_err(|e| e.to_string())?;
    info!(
        "compared {} documents -> {}",
        comparison.items.len(),
        output.display()
    );
    Ok(())
}
