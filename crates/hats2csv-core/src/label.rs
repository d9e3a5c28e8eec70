//! Class-label resolution.
//!
//! A partition's labels come from exactly one place: a per-row `Class`
//! column in the catalog, or a single job-level label applied to every
//! row. Resolving the source once per partition, before any row
//! processing, keeps the missing-label failure path explicit.

use arrow::datatypes::Schema;

use crate::error::TransformError;
use crate::schema::CLASS_COLUMN;

/// Where a partition's class labels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// The catalog carries a per-row `Class` column, used as-is.
    Column,
    /// Every row receives this job-level label.
    Global(String),
}

impl LabelSource {
    /// Resolve the label source for one partition.
    ///
    /// The `Class` column wins when present; otherwise the job-level
    /// label is used. Neither present on a non-empty partition is
    /// [`TransformError::MissingLabel`], carrying the partition index.
    pub fn resolve(
        schema: &Schema,
        global_label: Option<&str>,
        partition: usize,
    ) -> Result<Self, TransformError> {
        if schema.field_with_name(CLASS_COLUMN).is_ok() {
            return Ok(LabelSource::Column);
        }
        match global_label {
            Some(label) => Ok(LabelSource::Global(label.to_string())),
            None => Err(TransformError::MissingLabel { partition }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field};

    fn schema_with_class() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new(CLASS_COLUMN, DataType::Utf8, true),
        ])
    }

    fn schema_without_class() -> Schema {
        Schema::new(vec![Field::new("id", DataType::Int64, false)])
    }

    #[test]
    fn column_wins_over_global_label() {
        let source = LabelSource::resolve(&schema_with_class(), Some("ignored"), 0).unwrap();
        assert_eq!(source, LabelSource::Column);
    }

    #[test]
    fn global_label_used_when_column_absent() {
        let source = LabelSource::resolve(&schema_without_class(), Some("rrlyr"), 0).unwrap();
        assert_eq!(source, LabelSource::Global("rrlyr".to_string()));
    }

    #[test]
    fn neither_is_a_missing_label_failure() {
        let err = LabelSource::resolve(&schema_without_class(), None, 42).unwrap_err();
        assert!(matches!(err, TransformError::MissingLabel { partition: 42 }));
    }
}
