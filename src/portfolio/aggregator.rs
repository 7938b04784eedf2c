//! Turns a repository URL into a [`RepositoryRecord`].

use tracing::{debug, info};

use crate::github::error::PortfolioError;
use crate::github::gateway::RepositoryGateway;
use crate::github::locator::RepositoryLocator;

use super::images::ImageDiscovery;
use super::record::RepositoryRecord;

/// Aggregates metadata, languages, and images for one repository.
///
/// # Example
///
/// ```ignore
/// use repofolio::{OctocrabRepositoryGateway, RepoAggregator};
///
/// let gateway = OctocrabRepositoryGateway::for_token(None, &api_base)?;
/// let record = RepoAggregator::new(&gateway)
///     .aggregate("https://github.com/octocat/Hello-World")
///     .await?;
/// ```
pub struct RepoAggregator<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> RepoAggregator<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Create an aggregator backed by `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Builds the portfolio record for `repository_url`.
    ///
    /// The URL is validated before any request is made. Metadata and
    /// languages are fetched concurrently; image discovery follows because
    /// it needs the default branch and owner avatar.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUrl` for malformed input,
    /// `PortfolioError::NotFound` when the repository does not exist, and
    /// the gateway's error when metadata or languages cannot be loaded.
    /// Image discovery never fails the call.
    pub async fn aggregate(&self, repository_url: &str) -> Result<RepositoryRecord, PortfolioError> {
        let locator = RepositoryLocator::parse(repository_url)?;
        self.aggregate_locator(&locator).await
    }

    /// Same as [`Self::aggregate`] for an already parsed locator.
    ///
    /// # Errors
    ///
    /// See [`Self::aggregate`].
    pub async fn aggregate_locator(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryRecord, PortfolioError> {
        debug!(repository = %locator, "loading metadata and languages");
        let (metadata, language_bytes) = tokio::try_join!(
            self.client.repository(locator),
            self.client.languages(locator),
        )?;

        let images = ImageDiscovery::new(self.client, locator, &metadata)
            .find_images()
            .await;

        info!(
            repository = %locator,
            languages = language_bytes.len(),
            images = images.len(),
            "repository aggregated"
        );
        Ok(RepositoryRecord::new(metadata, language_bytes, images))
    }
}
