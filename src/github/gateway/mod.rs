//! Gateways for loading repository data through Octocrab.
//!
//! The trait-based design lets the aggregator run against mocks and fakes in
//! tests while the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod repository;

pub use repository::{
    DEFAULT_LISTING_PAGE_SIZE, ListRepositoriesParams, OctocrabRepositoryGateway,
    RepositoryListing,
};

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::github::error::PortfolioError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{DirectoryProbe, RepositoryMetadata};

/// Gateway for the read-only repository endpoints a portfolio needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch repository metadata.
    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryMetadata, PortfolioError>;

    /// Fetch per-language byte counts.
    async fn languages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<BTreeMap<String, u64>, PortfolioError>;

    /// List a directory. An empty `path` lists the repository root.
    ///
    /// A missing directory is reported as [`DirectoryProbe::Absent`] rather
    /// than an error.
    async fn list_directory(
        &self,
        locator: &RepositoryLocator,
        path: &str,
    ) -> Result<DirectoryProbe, PortfolioError>;

    /// Fetch the raw README text, or `None` when the repository has none.
    async fn readme(&self, locator: &RepositoryLocator) -> Result<Option<String>, PortfolioError>;

    /// List the authenticated user's repositories, most recently updated
    /// first. Requires a token.
    async fn list_user_repositories(
        &self,
        params: &ListRepositoriesParams,
    ) -> Result<RepositoryListing, PortfolioError>;
}
