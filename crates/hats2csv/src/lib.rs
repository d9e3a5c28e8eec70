// hats2csv - convert a HATS-style partitioned catalog into per-partition
// class-distribution summaries.
//
// The work is split the usual way: pure transform logic in hats2csv-core,
// filesystem output in hats2csv-writer, configuration in hats2csv-config.
// This crate owns catalog discovery, the worker pool, and the job driver
// that ties them together.

pub mod catalog;
pub mod executor;
pub mod init;
pub mod job;

pub use catalog::{Catalog, PartitionTask};
pub use executor::{PartitionExecutor, SerialExecutor, WorkerPool};
pub use init::init_tracing;
pub use job::{run_job, JobReport, PartitionOutcome};
