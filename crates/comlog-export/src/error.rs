//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Export-related errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output file could not be created.
    #[error("failed to create output file: {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be written.
    #[error("failed to write to output file")]
    Write(#[from] std::io::Error),
}
