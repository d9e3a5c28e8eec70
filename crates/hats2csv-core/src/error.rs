//! Error types for the partition transform.

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use thiserror::Error;

/// Errors that can occur while cleaning a partition.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A non-empty partition has neither a `Class` column nor a job-level
    /// label. Recoverable per partition: callers record it and move on to
    /// the next partition.
    #[error(
        "partition {partition} has no class label: the catalog has no 'Class' column \
         and no job-level label was provided; add a 'Class' column to the catalog or \
         set the job's label"
    )]
    MissingLabel { partition: usize },

    /// A column the transform depends on is absent from the partition.
    #[error("required column '{name}' is missing from the partition schema")]
    MissingColumn { name: &'static str },

    /// The light-curve column is not a nested list of measurements.
    #[error("light-curve column has unsupported type {datatype}, expected a list of measurements")]
    UnsupportedLightCurve { datatype: DataType },

    /// The class column does not hold strings.
    #[error("class column has unsupported type {datatype}, expected strings")]
    UnsupportedLabel { datatype: DataType },

    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
