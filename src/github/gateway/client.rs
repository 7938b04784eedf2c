//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::PortfolioError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL, authenticated when
/// a token is supplied.
///
/// # Errors
///
/// Returns `PortfolioError::InvalidUrl` when the base URI cannot be parsed or
/// `PortfolioError::Configuration` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, PortfolioError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| PortfolioError::InvalidUrl(format!("{api_base}: {error}")))?;

    let builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| PortfolioError::Configuration {
            message: format!("build client failed: {error}"),
        })?;

    let authenticated = match token {
        Some(value) => builder.personal_token(value.as_ref()),
        None => builder,
    };

    authenticated
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
