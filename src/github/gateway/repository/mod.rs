//! Octocrab-backed repository gateway.
//!
//! Every call goes through the raw request API so the HTTP status stays
//! available: 404 on a directory or README is an expected answer, not an
//! error, and upstream failures keep their status code.

use std::collections::BTreeMap;

use async_trait::async_trait;
use http::header::HeaderMap;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::github::error::PortfolioError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiContents, ApiRepository, ContentEntry, DirectoryProbe, RepositoryMetadata,
    RepositorySummary,
};

use super::RepositoryGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{extract_github_message, raw_content_headers};

mod types;

pub use types::{DEFAULT_LISTING_PAGE_SIZE, ListRepositoriesParams, RepositoryListing};

const USER_REPOSITORIES_PATH: &str = "/user/repos";

/// Status and body of a completed GitHub request.
struct RawResponse {
    status: StatusCode,
    body: String,
}

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client against `api_base`, authenticated when a
    /// token is supplied.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUrl` when the base URI cannot be parsed
    /// or `PortfolioError::Configuration` when Octocrab fails to construct a
    /// client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        api_base: &Url,
    ) -> Result<Self, PortfolioError> {
        let octocrab = build_octocrab_client(token, api_base.as_str())?;
        Ok(Self::new(octocrab))
    }

    async fn send(
        &self,
        operation: &str,
        path: &str,
        headers: Option<HeaderMap>,
    ) -> Result<RawResponse, PortfolioError> {
        let uri: Uri = path
            .parse::<Uri>()
            .map_err(|error| PortfolioError::InvalidUrl(format!("{path}: {error}")))?;

        let response = self
            .client
            ._get_with_headers(uri, headers)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let status = response.status();
        let body = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| PortfolioError::Network {
                message: format!("{operation} response read failed: {error}"),
            })?;

        debug!(operation, status = status.as_u16(), "GitHub request completed");
        Ok(RawResponse { status, body })
    }

    /// Sends a request that must succeed and decodes its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<T, PortfolioError> {
        let response = self.send(operation, path, None).await?;
        if !response.status.is_success() {
            return Err(map_http_error(
                operation,
                response.status,
                extract_github_message(&response.body),
            ));
        }
        decode(operation, &response.body)
    }
}

fn decode<T: DeserializeOwned>(operation: &str, body: &str) -> Result<T, PortfolioError> {
    serde_json::from_str(body).map_err(|error| PortfolioError::Decode {
        message: format!("{operation} response deserialisation failed: {error}"),
    })
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), PortfolioError> {
    if page == 0 {
        return Err(PortfolioError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(PortfolioError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > DEFAULT_LISTING_PAGE_SIZE {
        return Err(PortfolioError::InvalidPagination {
            message: format!("per_page must not exceed {DEFAULT_LISTING_PAGE_SIZE}"),
        });
    }

    Ok(())
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryMetadata, PortfolioError> {
        let operation = format!("repository {locator}");
        let api: ApiRepository = self
            .get_json(&operation, &locator.repository_path()?)
            .await?;
        Ok(api.into_metadata(locator.owner().as_str()))
    }

    async fn languages(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<BTreeMap<String, u64>, PortfolioError> {
        let operation = format!("languages of {locator}");
        self.get_json(&operation, &locator.languages_path()?).await
    }

    async fn list_directory(
        &self,
        locator: &RepositoryLocator,
        path: &str,
    ) -> Result<DirectoryProbe, PortfolioError> {
        let operation = format!("contents of {locator}/{path}");
        let response = self
            .send(&operation, &locator.contents_path(path)?, None)
            .await?;

        match response.status {
            StatusCode::NOT_FOUND => Ok(DirectoryProbe::Absent),
            status if status.is_success() => {
                let contents: ApiContents = decode(&operation, &response.body)?;
                let entries: Vec<ContentEntry> = contents.into();
                Ok(DirectoryProbe::Found(entries))
            }
            status => Err(map_http_error(
                &operation,
                status,
                extract_github_message(&response.body),
            )),
        }
    }

    async fn readme(&self, locator: &RepositoryLocator) -> Result<Option<String>, PortfolioError> {
        let operation = format!("README of {locator}");
        let response = self
            .send(
                &operation,
                &locator.readme_path()?,
                Some(raw_content_headers()),
            )
            .await?;

        match response.status {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.body)),
            status => Err(map_http_error(
                &operation,
                status,
                extract_github_message(&response.body),
            )),
        }
    }

    async fn list_user_repositories(
        &self,
        params: &ListRepositoriesParams,
    ) -> Result<RepositoryListing, PortfolioError> {
        let page = params.page.unwrap_or(1);
        let per_page = params.per_page.unwrap_or(DEFAULT_LISTING_PAGE_SIZE);

        validate_pagination_params(page, per_page)?;

        let page_str = page.to_string();
        let per_page_str = per_page.to_string();
        let query_params = [
            ("sort", "updated"),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiRepository> = self
            .client
            .get(USER_REPOSITORIES_PATH, Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list user repositories", &error))?;

        let has_next = page_result.next.is_some();
        let repositories: Vec<RepositorySummary> = page_result
            .items
            .into_iter()
            .map(RepositorySummary::from)
            .collect();

        debug!(page, count = repositories.len(), has_next, "user repositories listed");
        Ok(RepositoryListing {
            page,
            has_next,
            repositories,
        })
    }
}
