//! Per-partition summary CSV writing.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use arrow::array::{RecordBatch, StringArray, UInt64Array};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use hats2csv_core::LabelCount;
use tracing::info;

use crate::error::{Result, WriterError};
use crate::layout::{ensure_layout, summary_path};

fn summary_schema() -> Arc<Schema> {
    static SCHEMA: OnceLock<Arc<Schema>> = OnceLock::new();
    Arc::clone(SCHEMA.get_or_init(|| {
        Arc::new(Schema::new(vec![
            Field::new("label", DataType::Utf8, false),
            Field::new("size", DataType::UInt64, false),
            Field::new("start_index", DataType::Utf8, false),
        ]))
    }))
}

/// Write one partition's label distribution to
/// `<target>/objects/partition_<index>.csv`, overwriting any previous run.
///
/// Columns are `label,size,start_index` with a header row and no index
/// column; `division` - the partition's start-key marker - repeats on
/// every row. Identical inputs produce byte-identical files.
pub fn write_summary(
    target: &Path,
    partition: usize,
    division: &str,
    distribution: &[LabelCount],
) -> Result<PathBuf> {
    ensure_layout(target)?;
    let path = summary_path(target, partition);

    let labels = StringArray::from_iter_values(distribution.iter().map(|c| c.label.as_str()));
    let sizes = UInt64Array::from_iter_values(distribution.iter().map(|c| c.size));
    let starts = StringArray::from_iter_values(distribution.iter().map(|_| division));
    let batch = RecordBatch::try_new(
        summary_schema(),
        vec![Arc::new(labels), Arc::new(sizes), Arc::new(starts)],
    )?;

    let file = File::create(&path).map_err(|e| WriterError::io(&path, e))?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(&batch)?;
    drop(writer);

    info!(
        partition,
        path = %path.display(),
        labels = distribution.len(),
        "created partition summary"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<LabelCount> {
        pairs
            .iter()
            .map(|(label, size)| LabelCount {
                label: label.to_string(),
                size: *size,
            })
            .collect()
    }

    #[test]
    fn writes_header_and_one_row_per_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), 3, "Npix=11", &counts(&[("a", 2), ("b", 2)])).unwrap();

        assert_eq!(path, dir.path().join("objects/partition_3.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "label,size,start_index\na,2,Npix=11\nb,2,Npix=11\n"
        );
    }

    #[test]
    fn empty_distribution_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), 0, "Npix=0", &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "label,size,start_index\n");
    }

    #[test]
    fn rerun_overwrites_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let distribution = counts(&[("agn", 7), ("rrlyr", 1)]);

        let path = write_summary(dir.path(), 5, "Npix=42", &distribution).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_summary(dir.path(), 5, "Npix=42", &distribution).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn shrinking_rerun_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        write_summary(dir.path(), 1, "d", &counts(&[("a", 1), ("b", 2), ("c", 3)])).unwrap();
        let path = write_summary(dir.path(), 1, "d", &counts(&[("a", 1)])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "label,size,start_index\na,1,d\n");
    }
}
