//! Partition execution strategies.
//!
//! The driver only needs a capability that can invoke the per-partition
//! unit of work across a set of partitions, in parallel, with no shared
//! mutable state. Keeping that behind a trait lets tests run partitions
//! deterministically on the current thread.

use anyhow::Result;
use rayon::prelude::*;

use crate::catalog::PartitionTask;
use crate::job::PartitionOutcome;

/// Runs the per-partition unit of work across a set of partitions.
///
/// Implementations must invoke `work` at most once per partition and must
/// not share mutable state between invocations. Ordering of the returned
/// outcomes follows the task order, not completion order.
pub trait PartitionExecutor {
    fn execute(
        &self,
        tasks: &[PartitionTask],
        work: &(dyn Fn(&PartitionTask) -> PartitionOutcome + Sync),
    ) -> Result<Vec<PartitionOutcome>>;
}

/// Fixed-size worker pool: `workers` threads, each processing one
/// partition at a time.
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }
}

impl PartitionExecutor for WorkerPool {
    fn execute(
        &self,
        tasks: &[PartitionTask],
        work: &(dyn Fn(&PartitionTask) -> PartitionOutcome + Sync),
    ) -> Result<Vec<PartitionOutcome>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("hats2csv-worker-{i}"))
            .build()?;
        Ok(pool.install(|| tasks.par_iter().map(work).collect()))
    }
}

/// Runs partitions one after another on the caller's thread.
pub struct SerialExecutor;

impl PartitionExecutor for SerialExecutor {
    fn execute(
        &self,
        tasks: &[PartitionTask],
        work: &(dyn Fn(&PartitionTask) -> PartitionOutcome + Sync),
    ) -> Result<Vec<PartitionOutcome>> {
        Ok(tasks.iter().map(work).collect())
    }
}
