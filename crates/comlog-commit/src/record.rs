//! Normalized commit record.

use serde::{Deserialize, Serialize};

/// A commit normalized for tabular output.
///
/// The raw commit message is split at the first line break: everything
/// before it becomes the summary, everything after it the description,
/// both trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (SHA), as assigned by the remote.
    pub sha: String,

    /// The authorship date, as an ISO-8601 string passed through verbatim.
    pub date: String,

    /// The commit author display name.
    pub author: String,

    /// The first line of the commit message, trimmed.
    pub summary: String,

    /// The rest of the commit message after the first line break, trimmed.
    /// Empty when the message has no second line.
    pub description: String,
}

impl CommitRecord {
    /// Column names in output order.
    pub const CSV_HEADER: [&'static str; 5] = ["SHA", "Date", "Author", "Summary", "Description"];

    /// Creates a record from a raw commit message, splitting it into
    /// summary and description at the first line break.
    #[must_use]
    pub fn from_message(
        sha: impl Into<String>,
        date: impl Into<String>,
        author: impl Into<String>,
        message: &str,
    ) -> Self {
        let (summary, description) = match message.split_once('\n') {
            Some((subject, body)) => (subject.trim(), body.trim()),
            None => (message.trim(), ""),
        };

        Self {
            sha: sha.into(),
            date: date.into(),
            author: author.into(),
            summary: summary.to_string(),
            description: description.to_string(),
        }
    }

    /// Returns the record's fields in output column order.
    #[must_use]
    pub fn csv_fields(&self) -> [&str; 5] {
        [
            &self.sha,
            &self.date,
            &self.author,
            &self.summary,
            &self.description,
        ]
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(message: &str) -> CommitRecord {
        CommitRecord::from_message(
            "abc1234567890",
            "2024-05-01T12:00:00Z",
            "Test Author",
            message,
        )
    }

    #[test]
    fn test_from_message_single_line() {
        let record = make_record("Fix bug");
        assert_eq!(record.summary, "Fix bug");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_from_message_with_body() {
        let record = make_record("Fix bug\n\nDetails here");
        assert_eq!(record.summary, "Fix bug");
        assert_eq!(record.description, "Details here");
    }

    #[test]
    fn test_from_message_trims_summary() {
        let record = make_record("  Fix bug  \nbody");
        assert_eq!(record.summary, "Fix bug");
        assert_eq!(record.description, "body");
    }

    #[test]
    fn test_from_message_crlf() {
        let record = make_record("Fix bug\r\nbody text");
        assert_eq!(record.summary, "Fix bug");
        assert_eq!(record.description, "body text");
    }

    #[test]
    fn test_from_message_multiline_body_preserved() {
        let record = make_record("subject\n\nline one\nline two");
        assert_eq!(record.summary, "subject");
        assert_eq!(record.description, "line one\nline two");
    }

    #[test]
    fn test_from_message_empty() {
        let record = make_record("");
        assert_eq!(record.summary, "");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_split_loses_only_boundary_whitespace() {
        // Rejoining summary and description recovers the message modulo
        // whitespace at the split boundary and at each part's ends.
        let message = "Add feature  \n\n  Longer explanation.\nSecond line.  ";
        let record = make_record(message);
        let rejoined = format!("{}\n{}", record.summary, record.description);
        assert_eq!(rejoined, "Add feature\nLonger explanation.\nSecond line.");
    }

    #[test]
    fn test_fields_carried_through() {
        let record = CommitRecord::from_message(
            "deadbeef",
            "2024-01-02T03:04:05Z",
            "Jane Dev",
            "feat: add thing",
        );
        assert_eq!(record.sha, "deadbeef");
        assert_eq!(record.date, "2024-01-02T03:04:05Z");
        assert_eq!(record.author, "Jane Dev");
    }

    #[test]
    fn test_csv_fields_order() {
        let record = make_record("subject\nbody");
        let fields = record.csv_fields();
        assert_eq!(fields[0], "abc1234567890");
        assert_eq!(fields[1], "2024-05-01T12:00:00Z");
        assert_eq!(fields[2], "Test Author");
        assert_eq!(fields[3], "subject");
        assert_eq!(fields[4], "body");
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(
            CommitRecord::CSV_HEADER,
            ["SHA", "Date", "Author", "Summary", "Description"]
        );
    }

    #[test]
    fn test_short_sha() {
        let record = make_record("msg");
        assert_eq!(record.short_sha(), "abc1234");
    }

    #[test]
    fn test_short_sha_shorter_than_7() {
        let record = CommitRecord::from_message("abc", "d", "a", "m");
        assert_eq!(record.short_sha(), "abc");
    }

    #[test]
    fn test_serialize_deserialize() {
        let record = make_record("subject\nbody");
        let json = serde_json::to_string(&record).unwrap();
        let decoded: CommitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }
}
