//! Error types for the GitHub fetch layer.

use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetch error types.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Page size outside the range the remote accepts.
    #[error("invalid page size: {given} (must be between 1 and 100)")]
    InvalidPageSize { given: u32 },

    /// The request itself failed (connection, TLS, timeout).
    #[error("request for page {page} failed")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status.
    #[error("page {page} returned HTTP {status}: {body}")]
    RemoteUnavailable {
        page: u32,
        status: u16,
        body: String,
    },

    /// The response body was not the expected commit listing.
    #[error("malformed response on page {page}: {reason}")]
    MalformedResponse { page: u32, reason: String },

    /// The pagination loop hit the hard page ceiling.
    #[error("page limit exceeded: more than {limit} pages returned commits")]
    PageLimitExceeded { limit: u32 },
}
