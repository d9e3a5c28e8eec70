//! Class-label distribution for one cleaned partition.

use std::collections::BTreeMap;

use arrow::array::{RecordBatch, StringArray};

use crate::error::TransformError;
use crate::schema::CLASS_COLUMN;

/// One distinct label and its row count within a partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub size: u64,
}

/// Count the distinct class labels in a cleaned partition.
///
/// Labels come back in ascending lexicographic order so rerunning a job
/// produces byte-identical summaries. Null label values are skipped; they
/// cannot be counted as a label.
pub fn label_distribution(batch: &RecordBatch) -> Result<Vec<LabelCount>, TransformError> {
    let column = batch
        .column_by_name(CLASS_COLUMN)
        .ok_or(TransformError::MissingColumn { name: CLASS_COLUMN })?;
    let labels = column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| TransformError::UnsupportedLabel {
            datatype: column.data_type().clone(),
        })?;

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for label in labels.iter().flatten() {
        *counts.entry(label).or_insert(0) += 1;
    }

    Ok(counts
        .into_iter()
        .map(|(label, size)| LabelCount {
            label: label.to_string(),
            size,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Int64Array};
    use arrow::datatypes::{DataType, Field, Schema};
    use std::sync::Arc;

    fn class_batch(classes: Vec<Option<&str>>) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![Field::new(
            CLASS_COLUMN,
            DataType::Utf8,
            true,
        )]));
        RecordBatch::try_new(schema, vec![Arc::new(StringArray::from(classes)) as ArrayRef])
            .unwrap()
    }

    #[test]
    fn counts_come_back_in_ascending_label_order() {
        let batch = class_batch(vec![
            Some("ew"),
            Some("agn"),
            Some("rrlyr"),
            Some("agn"),
            Some("agn"),
        ]);

        let distribution = label_distribution(&batch).unwrap();
        assert_eq!(
            distribution,
            vec![
                LabelCount { label: "agn".into(), size: 3 },
                LabelCount { label: "ew".into(), size: 1 },
                LabelCount { label: "rrlyr".into(), size: 1 },
            ]
        );
    }

    #[test]
    fn null_labels_are_skipped() {
        let batch = class_batch(vec![Some("a"), None, Some("a")]);
        let distribution = label_distribution(&batch).unwrap();
        assert_eq!(distribution, vec![LabelCount { label: "a".into(), size: 2 }]);
    }

    #[test]
    fn empty_batch_yields_empty_distribution() {
        let batch = class_batch(vec![]);
        assert!(label_distribution(&batch).unwrap().is_empty());
    }

    #[test]
    fn non_string_class_column_is_rejected() {
        let schema = Arc::new(Schema::new(vec![Field::new(
            CLASS_COLUMN,
            DataType::Int64,
            true,
        )]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef],
        )
        .unwrap();

        let err = label_distribution(&batch).unwrap_err();
        assert!(matches!(
            err,
            TransformError::UnsupportedLabel {
                datatype: DataType::Int64
            }
        ));
    }
}
