use anyhow::Result;
use clap::Parser;
use hats2csv::{init_tracing, run_job, WorkerPool};
use hats2csv_config::RuntimeConfig;
use std::path::PathBuf;

/// Convert a partitioned catalog into per-partition class-distribution summaries
#[derive(Parser)]
#[command(name = "hats2csv")]
#[command(version)]
#[command(about = "Convert a partitioned catalog into per-partition class-distribution summaries", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog directory to read (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Output directory for summary files (overrides config file)
    #[arg(short, long, value_name = "DIR")]
    target: Option<PathBuf>,

    /// Global class label for catalogs without a 'Class' column
    #[arg(short, long, value_name = "LABEL")]
    label: Option<String>,

    /// Number of partition workers (overrides config file)
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load_from_file_path(path)?,
        None => RuntimeConfig::load()?,
    };
    if let Some(source) = cli.source {
        config.source = source;
    }
    if let Some(target) = cli.target {
        config.target = target;
    }
    if let Some(label) = cli.label {
        config.label = Some(label);
    }
    if let Some(workers) = cli.workers {
        config.executor.workers = workers;
    }
    config.validate()?;

    let executor = WorkerPool::new(config.executor.workers);
    let report = run_job(&config, &executor)?;
    println!("{report}");

    if !report.ok() {
        anyhow::bail!(
            "{} of {} partitions produced no summary",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(())
}
