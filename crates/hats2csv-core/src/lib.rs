// hats2csv-core - Catalog-agnostic partition transform logic
//
// This crate contains the PURE processing logic for cleaning one catalog
// partition: normalize the light-curve column, resolve the class-label
// source, and tabulate the label distribution. No I/O, no runtime
// dependencies - filesystem output lives in hats2csv-writer and partition
// scheduling in the hats2csv binary.

use arrow::array::RecordBatch;

pub mod clean;
pub mod distribution;
pub mod error;
pub mod label;
pub mod schema;

// Re-export commonly used items
pub use clean::{apply_label, normalize_light_curve};
pub use distribution::{label_distribution, LabelCount};
pub use error::TransformError;
pub use label::LabelSource;
pub use schema::{output_schema, CLASS_COLUMN, LC_COLUMN};

/// Result of cleaning one partition.
///
/// Carries the cleaned rows and the label distribution computed over them,
/// so callers never re-derive the distribution from the rows.
#[derive(Debug, Clone)]
pub struct CleanedPartition {
    /// Rows with null light-curves dropped and `Class` populated.
    pub rows: RecordBatch,
    /// Distinct labels and counts, ascending lexicographic order.
    pub distribution: Vec<LabelCount>,
}

/// Clean one catalog partition and tabulate its class-label distribution.
///
/// This is the pure per-partition transform: rows in, cleaned rows plus
/// distribution out. Deterministic for the same input; safe to invoke
/// concurrently for distinct partitions.
///
/// An empty partition is returned unchanged with an empty distribution,
/// before any label validation - "no data" is a defined no-op, not a
/// missing-label failure. For non-empty partitions the steps are:
///
/// 1. Normalize the light-curve column into the nested `List`
///    representation and drop rows whose light-curve is null.
/// 2. Resolve the label source: the catalog's own `Class` column, or the
///    job-level `global_label` applied to every row. Neither present is
///    [`TransformError::MissingLabel`] - no partial rows are returned on
///    this path.
/// 3. Count distinct labels over the cleaned rows.
pub fn clean_partition(
    batch: RecordBatch,
    global_label: Option<&str>,
    partition: usize,
) -> Result<CleanedPartition, TransformError> {
    if batch.num_rows() == 0 {
        return Ok(CleanedPartition {
            rows: batch,
            distribution: Vec::new(),
        });
    }

    let batch = normalize_light_curve(&batch)?;
    let source = LabelSource::resolve(&batch.schema(), global_label, partition)?;
    let batch = apply_label(batch, &source)?;
    let distribution = label_distribution(&batch)?;

    Ok(CleanedPartition {
        rows: batch,
        distribution,
    })
}
