//! Filesystem output for catalog conversion jobs.
//!
//! Owns the target directory layout and the per-partition summary CSV
//! files. Pure transform logic lives in `hats2csv-core`; everything with
//! a filesystem side effect lives here.

mod error;
mod layout;
mod summary;

pub use error::{Result, WriterError};
pub use layout::{ensure_layout, summary_path, OBJECTS_DIR};
pub use summary::write_summary;
