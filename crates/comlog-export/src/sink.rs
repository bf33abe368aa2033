//! CSV file sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ExportError, ExportResult};

/// A CSV file being written row by row.
///
/// Each `write_*` call appends exactly one line. Fields containing the
/// delimiter, quotes, or line breaks are quoted per RFC 4180; everything
/// else is written verbatim. Output is UTF-8 with `\n` line endings.
pub struct CsvSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl CsvSink {
    /// Creates (truncating) the output file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "creating CSV output");

        let file = File::create(&path).map_err(|e| ExportError::Create {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Returns the path the sink writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn write_header(&mut self, columns: &[&str]) -> ExportResult<()> {
        self.write_row(columns.iter().copied())
    }

    /// Writes one row of fields in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn write_row<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) -> ExportResult<()> {
        let mut first = true;
        for field in fields {
            if !first {
                self.writer.write_all(b",")?;
            }
            first = false;
            write_field(&mut self.writer, field)?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes buffered rows to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn finish(mut self) -> ExportResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes one field, quoting it if it contains a delimiter, a quote, or
/// a line break.
fn write_field(writer: &mut impl Write, field: &str) -> std::io::Result<()> {
    if field.contains(['"', ',', '\n', '\r']) {
        writer.write_all(b"\"")?;
        writer.write_all(field.replace('"', "\"\"").as_bytes())?;
        writer.write_all(b"\"")?;
    } else {
        writer.write_all(field.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_and_read(rows: &[Vec<&str>]) -> String {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut sink = CsvSink::create(&path).unwrap();
        for row in rows {
            sink.write_row(row.iter().copied()).unwrap();
        }
        sink.finish().unwrap();

        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_create_invalid_path() {
        let result = CsvSink::create("/nonexistent/dir/out.csv");
        assert!(matches!(result, Err(ExportError::Create { .. })));
    }

    #[test]
    fn test_plain_rows() {
        let content = write_and_read(&[vec!["a", "b", "c"], vec!["1", "2", "3"]]);
        assert_eq!(content, "a,b,c\n1,2,3\n");
    }

    #[test]
    fn test_header_then_rows_line_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut sink = CsvSink::create(&path).unwrap();
        sink.write_header(&["SHA", "Date", "Author", "Summary", "Description"])
            .unwrap();
        for i in 0..4 {
            let sha = format!("sha{i}");
            sink.write_row([sha.as_str(), "d", "a", "s", ""]).unwrap();
        }
        sink.finish().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "SHA,Date,Author,Summary,Description");
    }

    #[test]
    fn test_field_with_comma_is_quoted() {
        let content = write_and_read(&[vec!["fix: a, b, and c", "x"]]);
        assert_eq!(content, "\"fix: a, b, and c\",x\n");
    }

    #[test]
    fn test_field_with_quote_is_doubled() {
        let content = write_and_read(&[vec!["say \"hi\"", "x"]]);
        assert_eq!(content, "\"say \"\"hi\"\"\",x\n");
    }

    #[test]
    fn test_field_with_newline_is_quoted() {
        let content = write_and_read(&[vec!["line one\nline two", "x"]]);
        assert_eq!(content, "\"line one\nline two\",x\n");
    }

    #[test]
    fn test_empty_fields() {
        let content = write_and_read(&[vec!["", "", ""]]);
        assert_eq!(content, ",,\n");
    }

    #[test]
    fn test_create_truncates_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        fs::write(&path, "stale content\n").unwrap();

        let mut sink = CsvSink::create(&path).unwrap();
        sink.write_row(["fresh"]).unwrap();
        sink.finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_path_accessor() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let sink = CsvSink::create(&path).unwrap();
        assert_eq!(sink.path(), path);
    }
}
