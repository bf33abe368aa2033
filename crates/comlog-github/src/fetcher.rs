//! Pagination driver for the commit-listing endpoint.

use tracing::{debug, info};

use comlog_commit::FetchSession;

use crate::models::RawCommit;
use crate::{FetchError, FetchResult};

/// Branch used when the caller does not name one.
pub const DEFAULT_BRANCH: &str = "main";

/// Commits requested per page when the caller does not say.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the GitHub API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Hard ceiling on pages walked in one run. A remote that never returns
/// an empty page would otherwise keep the loop alive forever.
pub const MAX_PAGES: u32 = 10_000;

/// One page request against the listing endpoint.
///
/// Built fresh for every loop iteration and dropped once the response
/// has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch selector (`sha` query parameter).
    pub branch: String,
    /// 1-based page number.
    pub page: u32,
    /// Commits requested per page.
    pub per_page: u32,
}

/// Source of commit pages.
///
/// The real implementation is [`crate::GithubClient`]; tests script one
/// to drive the loop without a network.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetches one page of raw commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved or decoded.
    async fn fetch_page(&self, req: &PageRequest) -> FetchResult<Vec<RawCommit>>;
}

/// Parameters for one fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch to walk.
    pub branch: String,
    /// Commits per page, 1 to [`MAX_PAGE_SIZE`].
    pub per_page: u32,
}

impl FetchOptions {
    /// Creates options for the given repository with default branch and
    /// page size.
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the branch to walk.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// Drives pagination against a [`PageSource`] and normalizes each commit
/// into the session.
pub struct CommitFetcher<S> {
    source: S,
}

impl<S: PageSource> CommitFetcher<S> {
    /// Creates a fetcher over the given page source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Walks the commit listing from page 1 until the first empty page.
    ///
    /// Pages are requested strictly in sequence; page N+1 is never
    /// requested before page N has been fully consumed. The returned
    /// session holds the records in the order the remote produced them.
    /// Each call starts over from page 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `per_page` is out of range, if any page
    /// request fails at the transport or HTTP level, if a response body
    /// is not a well-formed commit listing, or if more than [`MAX_PAGES`]
    /// non-empty pages are returned. A failure on any page discards the
    /// records accumulated so far.
    pub async fn fetch(&self, opts: &FetchOptions) -> FetchResult<FetchSession> {
        if opts.per_page == 0 || opts.per_page > MAX_PAGE_SIZE {
            return Err(FetchError::InvalidPageSize {
                given: opts.per_page,
            });
        }

        let mut session = FetchSession::new();
        let mut page = 1u32;

        loop {
            if page > MAX_PAGES {
                return Err(FetchError::PageLimitExceeded { limit: MAX_PAGES });
            }

            let request = PageRequest {
                owner: opts.owner.clone(),
                repo: opts.repo.clone(),
                branch: opts.branch.clone(),
                page,
                per_page: opts.per_page,
            };

            let commits = self.source.fetch_page(&request).await?;
            if commits.is_empty() {
                break;
            }

            debug!(page, count = commits.len(), "fetched commit page");
            for commit in commits {
                session.push(commit.into_record());
            }

            page += 1;
        }

        info!(
            total = session.len(),
            pages = page - 1,
            "commit history walk complete"
        );
        Ok(session)
    }
}
