//! Partition discovery and reading for HATS-style catalogs.
//!
//! A catalog is a directory tree with one Parquet file per partition
//! (HATS nests them under `dataset/Norder=*/Dir=*/Npix=*.parquet`, but
//! any nesting works). Partitions are addressed by their position in the
//! sorted file list; the file stem doubles as the partition's start-key
//! marker, carried opaquely into the summary output.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arrow::array::{RecordBatch, RecordBatchReader};
use arrow::compute::concat_batches;
use arrow::datatypes::SchemaRef;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::debug;

/// One partition of the catalog: its job-unique index, start-key marker,
/// and backing Parquet file.
#[derive(Debug, Clone)]
pub struct PartitionTask {
    pub index: usize,
    pub division: String,
    pub path: PathBuf,
}

/// A lazily-read partitioned catalog.
///
/// Opening only lists partition files and reads the shared schema from
/// the first file's footer; row data is read per partition by whichever
/// worker picks the partition up.
#[derive(Debug)]
pub struct Catalog {
    schema: SchemaRef,
    partitions: Vec<PartitionTask>,
}

impl Catalog {
    pub fn open(root: &Path) -> Result<Self> {
        let mut files = Vec::new();
        collect_parquet_files(root, &mut files)
            .with_context(|| format!("Failed to scan catalog directory: {}", root.display()))?;
        if files.is_empty() {
            bail!(
                "no partition files (*.parquet) found under {}",
                root.display()
            );
        }
        files.sort();

        let schema = read_schema(&files[0])?;
        let partitions = files
            .into_iter()
            .enumerate()
            .map(|(index, path)| PartitionTask {
                index,
                division: division_key(&path),
                path,
            })
            .collect();

        Ok(Self { schema, partitions })
    }

    /// Schema shared by all partitions, read from the first file's footer.
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn partitions(&self) -> &[PartitionTask] {
        &self.partitions
    }

    /// Read one partition's rows as a single record batch.
    pub fn read_partition(task: &PartitionTask) -> Result<RecordBatch> {
        let file = File::open(&task.path)
            .with_context(|| format!("Failed to open partition file: {}", task.path.display()))?;
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .with_context(|| format!("Not a Parquet file: {}", task.path.display()))?
            .build()
            .with_context(|| {
                format!("Failed to read partition file: {}", task.path.display())
            })?;

        let schema = reader.schema();
        let batches = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| {
                format!("Failed to read partition file: {}", task.path.display())
            })?;
        debug!(partition = task.index, batches = batches.len(), "read partition");

        Ok(concat_batches(&schema, &batches)?)
    }
}

fn collect_parquet_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_parquet_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "parquet") {
            files.push(path);
        }
    }
    Ok(())
}

fn read_schema(path: &Path) -> Result<SchemaRef> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open partition file: {}", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Not a Parquet file: {}", path.display()))?;
    Ok(builder.schema().clone())
}

fn division_key(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
