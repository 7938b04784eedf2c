//! GitHub repository access for portfolio aggregation.
//!
//! This module parses repository URLs, wraps Octocrab behind the
//! [`RepositoryGateway`] trait, and maps HTTP failures into
//! [`PortfolioError`] variants so callers never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::PortfolioError;
pub use gateway::{
    ListRepositoriesParams, OctocrabRepositoryGateway, RepositoryGateway, RepositoryListing,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{
    ContentEntry, DirectoryProbe, EntryKind, RepositoryMetadata, RepositorySummary, Visibility,
};

#[cfg(test)]
pub use gateway::MockRepositoryGateway;
