//! Ganglia CLI - dashboard metrics over synthetic triple batches.
//!
//! One run scans the newest generated batch, derives its statistics, and
//! writes the dashboard JSON:
//!
//! ```bash
//! # Defaults match the standard data layout
//! ganglia
//!
//! # Everything is overridable
//! ganglia --synthetic-dir out/synthetic \
//!         --mappings out/kg_mappings.json \
//!         --triples out/kg_triples_ids.txt \
//!         --output web/dashboard_data.json
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use ganglia_core::{latest_generated_file, GeneratedBatch, IdentifierMap, ReferenceCorpus};
use ganglia_metrics::{
    decode_hypotheses, BatchMetrics, DashboardReport, MetricsConfig, RuleTable, TrainingStatus,
};
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ganglia")]
#[command(about = "Dashboard metrics for synthetic knowledge-graph batches", long_about = None)]
struct Cli {
    /// Directory holding generated batch files
    #[arg(long, default_value = "data/synthetic")]
    synthetic_dir: PathBuf,

    /// Reference triples file; enables the exact novelty check
    #[arg(long, default_value = "data/processed/kg_triples_ids.txt")]
    triples: PathBuf,

    /// Identifier-to-name mapping file (required)
    #[arg(long, default_value = "data/processed/kg_mappings.json")]
    mappings: PathBuf,

    /// Training log CSV
    #[arg(long, default_value = "data/processed/training_log.csv")]
    log: PathBuf,

    /// Output report path
    #[arg(short, long, default_value = "dashboard_data.json")]
    output: PathBuf,

    /// Filename prefix of generation files
    #[arg(long, default_value = "generated")]
    batch_prefix: String,

    /// Maximum decoded hypotheses in the report
    #[arg(long, default_value = "200")]
    sample_cap: usize,

    /// Relation vocabulary size assumed without a reference corpus
    #[arg(long, default_value = "15")]
    vocab_size: usize,

    /// Namespace prefix stripped from relation labels for display
    #[arg(long, default_value = "dblp:")]
    prefix: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    info!("updating dashboard data");

    let mapping = IdentifierMap::load(&cli.mappings)
        .with_context(|| format!("failed to load mappings {}", cli.mappings.display()))?;

    let Some(batch_file) = latest_generated_file(&cli.synthetic_dir, &cli.batch_prefix)
        .with_context(|| format!("failed to scan {}", cli.synthetic_dir.display()))?
    else {
        warn!(
            dir = %cli.synthetic_dir.display(),
            "no generated data found, nothing to report"
        );
        return Ok(());
    };

    info!(file = %batch_file.display(), "analyzing latest generation");
    let batch = GeneratedBatch::from_file(&batch_file)
        .with_context(|| format!("failed to read {}", batch_file.display()))?;

    let corpus = load_corpus(&cli.triples);

    let config = MetricsConfig::default()
        .with_sample_cap(cli.sample_cap)
        .with_default_vocab_size(cli.vocab_size)
        .with_relation_prefix(cli.prefix.clone());
    let rules = RuleTable::default();

    let metrics = BatchMetrics::compute(&batch, &corpus, &rules, &config);
    let hypotheses = decode_hypotheses(&batch, &mapping, &corpus, &config);
    let status = TrainingStatus::from_csv(&cli.log);

    let report = DashboardReport::assemble(
        Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        &status,
        &metrics,
        hypotheses,
        mapping.len(),
    );

    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(report = %cli.output.display(), "{}", metrics.summary());
    Ok(())
}

fn load_corpus(path: &PathBuf) -> ReferenceCorpus {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", path.display()));

    let corpus = ReferenceCorpus::load(path);

    if corpus.is_available() {
        pb.finish_with_message(format!(
            "Loaded {} known triples in {:.2?}",
            corpus.len(),
            start.elapsed()
        ));
    } else {
        pb.finish_and_clear();
    }
    corpus
}
