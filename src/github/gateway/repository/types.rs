//! Types for listing the authenticated user's repositories.

use serde::Serialize;

use crate::github::models::RepositorySummary;

/// Page size used when none is requested; GitHub's maximum.
pub const DEFAULT_LISTING_PAGE_SIZE: u8 = 100;

/// Parameters for listing the authenticated user's repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRepositoriesParams {
    /// Page number (1-based). Defaults to 1.
    pub page: Option<u32>,
    /// Items per page (1-100). Defaults to [`DEFAULT_LISTING_PAGE_SIZE`].
    pub per_page: Option<u8>,
}

/// One page of repositories, most recently updated first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListing {
    /// Page number that was fetched.
    pub page: u32,
    /// Whether GitHub advertised a following page.
    pub has_next: bool,
    /// Repositories on this page.
    pub repositories: Vec<RepositorySummary>,
}
