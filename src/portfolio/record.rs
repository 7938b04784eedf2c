//! The consolidated read model handed to the presentation layer.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::github::models::{RepositoryMetadata, Visibility};

use super::languages::{LanguageShare, language_breakdown};

/// De-duplicating set of image URLs.
///
/// Iteration order is lexical so serialised output is stable; callers that
/// need a particular ordering re-sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageSet(BTreeSet<String>);

impl ImageSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a URL, returning `false` when it was already present.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        self.0.insert(url.into())
    }

    /// Adds every URL from `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns true when `url` is present.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.0.contains(url)
    }

    /// Number of distinct URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no URL has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the URLs.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ImageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Everything a portfolio page shows about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    /// Owner login.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Web URL of the repository.
    pub html_url: Option<String>,
    /// Project homepage, typically a live deployment.
    pub homepage_url: Option<String>,
    /// Primary language detected by GitHub.
    pub primary_language: Option<String>,
    /// Bytes of source per language.
    pub language_bytes: BTreeMap<String, u64>,
    /// Stargazer count.
    pub star_count: u64,
    /// Fork count.
    pub fork_count: u64,
    /// Watcher count.
    pub watcher_count: u64,
    /// Creation timestamp, passed through unmodified.
    pub created_at: Option<String>,
    /// Last update timestamp, passed through unmodified.
    pub updated_at: Option<String>,
    /// Repository topics.
    pub topics: Vec<String>,
    /// Visibility.
    pub visibility: Visibility,
    /// Default branch name.
    pub default_branch: String,
    /// Representative images.
    pub images: ImageSet,
}

impl RepositoryRecord {
    /// Assembles a record from its three sources.
    #[must_use]
    pub fn new(
        metadata: RepositoryMetadata,
        language_bytes: BTreeMap<String, u64>,
        images: ImageSet,
    ) -> Self {
        Self {
            owner: metadata.owner,
            name: metadata.name,
            description: metadata.description,
            html_url: metadata.html_url,
            homepage_url: metadata.homepage_url,
            primary_language: metadata.primary_language,
            language_bytes,
            star_count: metadata.star_count,
            fork_count: metadata.fork_count,
            watcher_count: metadata.watcher_count,
            created_at: metadata.created_at,
            updated_at: metadata.updated_at,
            topics: metadata.topics,
            visibility: metadata.visibility,
            default_branch: metadata.default_branch,
            images,
        }
    }

    /// Language percentages, largest first.
    #[must_use]
    pub fn language_shares(&self) -> Vec<LanguageShare> {
        language_breakdown(&self.language_bytes)
    }
}
