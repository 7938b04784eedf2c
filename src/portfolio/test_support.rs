//! In-memory repository gateway for tests.
//!
//! Directories, README text, the user's repository listing, and failures are
//! configured up front; every directory request is recorded so tests can
//! assert which paths were visited.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::github::error::PortfolioError;
use crate::github::gateway::{ListRepositoriesParams, RepositoryGateway, RepositoryListing};
use crate::github::locator::RepositoryLocator;
use crate::github::models::{ContentEntry, DirectoryProbe, RepositoryMetadata, RepositorySummary};

/// Configurable fake implementing [`RepositoryGateway`].
#[derive(Debug, Default)]
pub struct FakeRepositoryGateway {
    metadata: RepositoryMetadata,
    languages: BTreeMap<String, u64>,
    directories: HashMap<String, Vec<ContentEntry>>,
    failing_directories: HashMap<String, PortfolioError>,
    readme: Option<String>,
    readme_error: Option<PortfolioError>,
    user_repositories: Vec<RepositorySummary>,
    requested_paths: Mutex<Vec<String>>,
}

impl FakeRepositoryGateway {
    /// Creates a fake serving `metadata` with no languages, directories, or
    /// README.
    #[must_use]
    pub fn new(metadata: RepositoryMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Serves `bytes` for `language`.
    #[must_use]
    pub fn with_language(mut self, language: &str, bytes: u64) -> Self {
        self.languages.insert(language.to_owned(), bytes);
        self
    }

    /// Serves `entries` when `path` is listed. Use `""` for the root.
    #[must_use]
    pub fn with_directory(mut self, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.directories.insert(path.to_owned(), entries);
        self
    }

    /// Fails listings of `path` with `error`.
    #[must_use]
    pub fn with_failing_directory(mut self, path: &str, error: PortfolioError) -> Self {
        self.failing_directories.insert(path.to_owned(), error);
        self
    }

    /// Serves `text` as the README.
    #[must_use]
    pub fn with_readme(mut self, text: &str) -> Self {
        self.readme = Some(text.to_owned());
        self
    }

    /// Fails README lookups with `error`.
    #[must_use]
    pub fn with_readme_error(mut self, error: PortfolioError) -> Self {
        self.readme_error = Some(error);
        self
    }

    /// Serves `summary` in the user's repository listing, after any added
    /// earlier.
    #[must_use]
    pub fn with_user_repository(mut self, summary: RepositorySummary) -> Self {
        self.user_repositories.push(summary);
        self
    }

    /// Paths listed so far, in request order.
    #[must_use]
    pub fn requested_paths(&self) -> Vec<String> {
        self.requested_paths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RepositoryGateway for FakeRepositoryGateway {
    async fn repository(
        &self,
        _locator: &RepositoryLocator,
    ) -> Result<RepositoryMetadata, PortfolioError> {
        Ok(self.metadata.clone())
    }

    async fn languages(
        &self,
        _locator: &RepositoryLocator,
    ) -> Result<BTreeMap<String, u64>, PortfolioError> {
        Ok(self.languages.clone())
    }

    async fn list_directory(
        &self,
        _locator: &RepositoryLocator,
        path: &str,
    ) -> Result<DirectoryProbe, PortfolioError> {
        self.requested_paths
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(path.to_owned());

        if let Some(error) = self.failing_directories.get(path) {
            return Err(error.clone());
        }

        Ok(self
            .directories
            .get(path)
            .map_or(DirectoryProbe::Absent, |entries| {
                DirectoryProbe::Found(entries.clone())
            }))
    }

    async fn readme(&self, _locator: &RepositoryLocator) -> Result<Option<String>, PortfolioError> {
        match &self.readme_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.readme.clone()),
        }
    }

    async fn list_user_repositories(
        &self,
        params: &ListRepositoriesParams,
    ) -> Result<RepositoryListing, PortfolioError> {
        Ok(RepositoryListing {
            page: params.page.unwrap_or(1),
            has_next: false,
            repositories: self.user_repositories.clone(),
        })
    }
}
