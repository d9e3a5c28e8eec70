//! The job driver: dispatch the partition transform across the catalog
//! and aggregate per-partition outcomes into a report.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use hats2csv_config::RuntimeConfig;
use hats2csv_core::{clean_partition, output_schema, TransformError};
use hats2csv_writer::write_summary;
use tracing::{error, info};

use crate::catalog::{Catalog, PartitionTask};
use crate::executor::PartitionExecutor;

/// What happened to one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionOutcome {
    /// Cleaned and summarized.
    Completed {
        index: usize,
        rows: usize,
        labels: usize,
    },
    /// Empty input partition; nothing written, nothing created.
    Empty { index: usize },
    /// The partition had no label source; no summary was written.
    MissingLabel { index: usize },
    /// Reading, transforming, or writing the partition failed.
    Failed { index: usize, reason: String },
}

/// Aggregate job result: one outcome per partition.
///
/// The original pipeline only printed tracebacks from inside workers, so
/// a job could "succeed" while partitions silently produced nothing.
/// Collecting every outcome here makes partial data loss visible at the
/// job level.
#[derive(Debug, Default)]
pub struct JobReport {
    pub outcomes: Vec<PartitionOutcome>,
}

impl JobReport {
    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PartitionOutcome::Completed { .. }))
            .count()
    }

    pub fn empty(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PartitionOutcome::Empty { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.completed() - self.empty()
    }

    /// Partitions that produced no summary: missing-label and hard failures.
    pub fn failures(&self) -> impl Iterator<Item = &PartitionOutcome> {
        self.outcomes.iter().filter(|o| {
            matches!(
                o,
                PartitionOutcome::MissingLabel { .. } | PartitionOutcome::Failed { .. }
            )
        })
    }

    /// True when every partition either completed or was empty.
    pub fn ok(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for JobReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} partitions: {} completed, {} empty, {} failed",
            self.outcomes.len(),
            self.completed(),
            self.empty(),
            self.failed()
        )?;
        for outcome in self.failures() {
            match outcome {
                PartitionOutcome::MissingLabel { index } => {
                    write!(f, "\n  partition {index}: no class label")?;
                }
                PartitionOutcome::Failed { index, reason } => {
                    write!(f, "\n  partition {index}: {reason}")?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Run a full conversion job: open the catalog, fan the partition
/// transform out on the executor, and collect the report.
pub fn run_job(config: &RuntimeConfig, executor: &impl PartitionExecutor) -> Result<JobReport> {
    let catalog = Catalog::open(&config.source)?;
    let template = output_schema(catalog.schema());
    info!(
        partitions = catalog.partitions().len(),
        columns = template.fields().len(),
        source = %config.source.display(),
        target = %config.target.display(),
        "starting conversion job"
    );

    let label = config.label.as_deref();
    let target = config.target.as_path();
    let outcomes = executor.execute(catalog.partitions(), &|task| {
        process_partition(task, target, label)
    })?;

    let report = JobReport { outcomes };
    info!(%report, "conversion job finished");
    Ok(report)
}

/// The per-partition unit of work. Every failure is contained here so one
/// partition can never abort its siblings.
fn process_partition(task: &PartitionTask, target: &Path, label: Option<&str>) -> PartitionOutcome {
    let batch = match Catalog::read_partition(task) {
        Ok(batch) => batch,
        Err(err) => {
            error!(
                partition = task.index,
                division = %task.division,
                "partition read failed: {err:#}"
            );
            return PartitionOutcome::Failed {
                index: task.index,
                reason: format!("{err:#}"),
            };
        }
    };

    if batch.num_rows() == 0 {
        return PartitionOutcome::Empty { index: task.index };
    }

    let cleaned = match clean_partition(batch, label, task.index) {
        Ok(cleaned) => cleaned,
        Err(err @ TransformError::MissingLabel { .. }) => {
            error!(partition = task.index, division = %task.division, "{err}");
            return PartitionOutcome::MissingLabel { index: task.index };
        }
        Err(err) => {
            error!(
                partition = task.index,
                division = %task.division,
                "partition transform failed: {err}"
            );
            return PartitionOutcome::Failed {
                index: task.index,
                reason: err.to_string(),
            };
        }
    };

    match write_summary(target, task.index, &task.division, &cleaned.distribution) {
        Ok(_) => PartitionOutcome::Completed {
            index: task.index,
            rows: cleaned.rows.num_rows(),
            labels: cleaned.distribution.len(),
        },
        Err(err) => {
            error!(
                partition = task.index,
                division = %task.division,
                "summary write failed: {err}"
            );
            PartitionOutcome::Failed {
                index: task.index,
                reason: err.to_string(),
            }
        }
    }
}
