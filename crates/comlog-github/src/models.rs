//! Raw response models for the commit-listing endpoint.
//!
//! Only the fields the exporter consumes are modeled; everything else in
//! the GitHub payload is ignored.

use serde::Deserialize;

use comlog_commit::CommitRecord;

/// One commit object as returned by `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCommit {
    /// The commit hash.
    pub sha: String,

    /// Nested commit details.
    pub commit: CommitDetail,
}

/// The `commit` object nested inside a listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// The full commit message (subject + body).
    pub message: String,

    /// Authorship information.
    pub author: CommitAuthor,
}

/// Authorship information nested inside `commit`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    /// Author display name.
    pub name: String,

    /// ISO-8601 authorship date.
    pub date: String,
}

impl RawCommit {
    /// Normalizes this raw commit into a [`CommitRecord`], splitting the
    /// message into summary and description.
    #[must_use]
    pub fn into_record(self) -> CommitRecord {
        CommitRecord::from_message(
            self.sha,
            self.commit.author.date,
            self.commit.author.name,
            &self.commit.message,
        )
    }
}
