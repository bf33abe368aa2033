//! GitHub commit-listing client for Comlog.
//!
//! This crate provides:
//! - [`GithubClient`]: HTTP access to `GET /repos/{owner}/{repo}/commits`
//! - [`CommitFetcher`]: the pagination loop that walks the listing until
//!   the first empty page and normalizes every commit
//! - [`PageSource`]: the seam between the two, so the loop can be driven
//!   by scripted pages in tests

mod client;
mod error;
mod fetcher;
mod models;

pub use client::GithubClient;
pub use error::{FetchError, FetchResult};
pub use fetcher::{
    CommitFetcher, FetchOptions, PageRequest, PageSource, DEFAULT_BRANCH, DEFAULT_PAGE_SIZE,
    MAX_PAGES, MAX_PAGE_SIZE,
};
pub use models::{CommitAuthor, CommitDetail, RawCommit};
