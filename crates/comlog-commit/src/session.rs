//! Per-run accumulation of fetched records.

use crate::CommitRecord;

/// The ordered sequence of records accumulated across pages for one
/// fetch invocation.
///
/// Records keep the order the remote returned them: page order, then
/// within-page order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchSession {
    records: Vec<CommitRecord>,
}

impl FetchSession {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the session.
    pub fn push(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    /// Returns the number of accumulated records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the accumulated records in fetch order.
    #[must_use]
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    /// Consumes the session, returning the records.
    #[must_use]
    pub fn into_records(self) -> Vec<CommitRecord> {
        self.records
    }
}

impl IntoIterator for FetchSession {
    type Item = CommitRecord;
    type IntoIter = std::vec::IntoIter<CommitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
