//! Repofolio library crate turning GitHub repositories into portfolio data.
//!
//! The library parses repository URLs, loads metadata and language
//! statistics through Octocrab, discovers representative images in the
//! repository tree and README, and renders README drafts. The `repofolio`
//! binary wires these together behind layered configuration.

pub mod config;
pub mod github;
pub mod portfolio;
pub mod readme;

pub use config::{OutputFormat, RepofolioConfig};
pub use github::{
    ListRepositoriesParams, OctocrabRepositoryGateway, PersonalAccessToken, PortfolioError,
    RepositoryGateway, RepositoryListing, RepositoryLocator, RepositoryMetadata,
    RepositorySummary,
};
pub use portfolio::{
    GenerationQuota, ImageSet, LanguageShare, QuotaDecision, RepoAggregator, RepositoryRecord,
    UsageProfile,
};
pub use readme::{ReadmeDraft, render_markdown};
