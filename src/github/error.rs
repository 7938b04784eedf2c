//! Error types exposed by the GitHub and portfolio layers.

use thiserror::Error;

/// Errors surfaced while parsing input, talking to GitHub, or rendering a
/// portfolio.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortfolioError {
    /// No repository URL was supplied.
    #[error("repository URL is required")]
    MissingRepositoryUrl,

    /// The input is not a `https://github.com/<owner>/<repo>` URL.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// A token was required but missing, or supplied but blank.
    #[error("a non-blank personal access token is required")]
    MissingToken,

    /// Pagination parameters were outside the range GitHub accepts.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Which parameter was rejected and why.
        message: String,
    },

    /// GitHub reported that the resource does not exist.
    #[error("{resource} was not found on GitHub")]
    NotFound {
        /// Human readable description of the missing resource.
        resource: String,
    },

    /// GitHub answered with a non-success status.
    #[error("GitHub API error (status {status}): {message}")]
    Upstream {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// GitHub returned a payload that could not be decoded.
    #[error("unexpected GitHub response: {message}")]
    Decode {
        /// Decoding failure detail.
        message: String,
    },

    /// The free generation allowance is used up.
    #[error("free tier allows {limit} portfolios; upgrade to premium to generate more")]
    QuotaExhausted {
        /// Number of free generations permitted.
        limit: u32,
    },

    /// README template rendering failed.
    #[error("template error: {message}")]
    Template {
        /// Details about the rendering failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
