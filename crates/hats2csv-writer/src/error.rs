//! Error types for the summary writer.
//!
//! Filesystem failures get their own variant so callers can surface them
//! distinctly instead of folding them into per-partition label failures.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while writing summary output.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Creating the output layout or a summary file failed.
    #[error("summary output failed at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding the summary rows as CSV failed.
    #[error("summary CSV encoding failed: {0}")]
    Csv(#[from] arrow::error::ArrowError),
}

impl WriterError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type alias for WriterError
pub type Result<T> = std::result::Result<T, WriterError>;
