//! CSV sink for Comlog.
//!
//! This crate owns the tabular output side:
//! - [`CsvSink`]: a scoped, buffered CSV file with header and row appends

mod error;
mod sink;

pub use error::{ExportError, ExportResult};
pub use sink::CsvSink;
