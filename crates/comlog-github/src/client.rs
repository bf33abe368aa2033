//! HTTP client for the GitHub REST API.

use tracing::debug;

use crate::fetcher::{PageRequest, PageSource};
use crate::models::RawCommit;
use crate::{FetchError, FetchResult};

/// Base URL of the GitHub REST API.
const API_BASE: &str = "https://api.github.com";

/// Per-request timeout. The remote gets no retries, so a hung request
/// would otherwise stall the whole run.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// GitHub API client.
///
/// Holds the HTTP connection pool and the optional access token. The
/// token is passed in explicitly; there is no ambient credential lookup.
pub struct GithubClient {
    client: reqwest::Client,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a new client, optionally authenticated with a personal
    /// access token.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client, token }
    }

    /// Returns true if the client sends an `Authorization` header.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl PageSource for GithubClient {
    async fn fetch_page(&self, req: &PageRequest) -> FetchResult<Vec<RawCommit>> {
        let url = format!("{API_BASE}/repos/{}/{}/commits", req.owner, req.repo);
        debug!(page = req.page, %url, "requesting commit page");

        let per_page = req.per_page.to_string();
        let page = req.page.to_string();
        let mut builder = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .query(&[
                ("sha", req.branch.as_str()),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ]);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("token {token}"));
        }

        let response = builder.send().await.map_err(|e| FetchError::Transport {
            page: req.page,
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::RemoteUnavailable {
                page: req.page,
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse {
                page: req.page,
                reason: e.to_string(),
            })
    }
}
