//! Target directory layout.
//!
//! ```text
//! <target>/
//!   objects/
//!     partition_0.csv
//!     partition_1.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WriterError};

/// Subdirectory holding per-partition summary files.
pub const OBJECTS_DIR: &str = "objects";

/// Idempotently create `<target>/objects/`, returning its path.
/// Pre-existing directories are not an error.
pub fn ensure_layout(target: &Path) -> Result<PathBuf> {
    let objects = target.join(OBJECTS_DIR);
    fs::create_dir_all(&objects).map_err(|e| WriterError::io(&objects, e))?;
    Ok(objects)
}

/// Summary file path for one partition.
///
/// Partition indices are unique within a job; that uniqueness is the sole
/// mechanism keeping concurrent partition writers from colliding.
pub fn summary_path(target: &Path, partition: usize) -> PathBuf {
    target
        .join(OBJECTS_DIR)
        .join(format!("partition_{partition}.csv"))
}
