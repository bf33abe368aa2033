//! Commit record types for Comlog.
//!
//! This crate provides the core types used throughout Comlog:
//! - [`CommitRecord`]: A normalized commit ready for tabular output
//! - [`FetchSession`]: The ordered records accumulated over one fetch run

mod record;
mod session;

pub use record::CommitRecord;
pub use session::FetchSession;
