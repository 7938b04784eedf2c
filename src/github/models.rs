//! Data models representing repository metadata and directory contents.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use serde::{Deserialize, Serialize};

/// Default branch assumed when GitHub omits `default_branch`.
pub const DEFAULT_BRANCH: &str = "main";

/// Repository visibility as reported by GitHub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone.
    #[default]
    Public,
    /// Visible to collaborators only.
    Private,
    /// Visible to members of the owning enterprise.
    Internal,
}

impl Visibility {
    /// Resolves visibility from the API `visibility` string, falling back to
    /// the legacy `private` flag and finally to [`Visibility::Public`].
    #[must_use]
    pub fn resolve(visibility: Option<&str>, private: Option<bool>) -> Self {
        match visibility.map(str::to_ascii_lowercase).as_deref() {
            Some("public") => Self::Public,
            Some("private") => Self::Private,
            Some("internal") => Self::Internal,
            _ => match private {
                Some(true) => Self::Private,
                _ => Self::Public,
            },
        }
    }
}

/// Repository metadata used to build a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Owner login.
    pub owner: String,
    /// Owner avatar URL, when GitHub provides one.
    pub owner_avatar_url: Option<String>,
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
    /// Stargazer count.
    pub star_count: u64,
    /// Fork count.
    pub fork_count: u64,
    /// Watcher count.
    pub watcher_count: u64,
    /// Creation timestamp (ISO 8601 format).
    pub created_at: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
    /// Repository topics in GitHub order.
    pub topics: Vec<String>,
    /// Visibility.
    pub visibility: Visibility,
    /// Default branch name.
    pub default_branch: String,
}

/// One repository of the authenticated user's listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    /// Owner login.
    pub owner: String,
    /// Repository name.
    pub name: String,
    /// Short description.
    pub description: Option<String>,
    /// Primary language detected by GitHub.
    pub language: Option<String>,
    /// Stargazer count.
    pub star_count: u64,
    /// Default branch name.
    pub default_branch: String,
    /// Web URL of the repository; pass it back in to aggregate the repository.
    pub html_url: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
    /// Visibility.
    pub visibility: Visibility,
}

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symlink, submodule, or anything else GitHub reports.
    Other,
}

/// Single entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// File or directory name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Direct download URL for files.
    pub download_url: Option<String>,
}

impl ContentEntry {
    /// Creates a file entry.
    #[must_use]
    pub fn file(path: &str, download_url: Option<&str>) -> Self {
        Self {
            name: entry_name(path),
            path: path.to_owned(),
            kind: EntryKind::File,
            download_url: download_url.map(ToOwned::to_owned),
        }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn directory(path: &str) -> Self {
        Self {
            name: entry_name(path),
            path: path.to_owned(),
            kind: EntryKind::Directory,
            download_url: None,
        }
    }
}

fn entry_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_owned()
}

/// Outcome of probing a directory that may legitimately be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryProbe {
    /// The directory exists; its entries are attached.
    Found(Vec<ContentEntry>),
    /// GitHub answered 404 for the path.
    Absent,
}

impl DirectoryProbe {
    /// Returns the entries, treating an absent directory as empty.
    #[must_use]
    pub fn into_entries(self) -> Vec<ContentEntry> {
        match self {
            Self::Found(entries) => entries,
            Self::Absent => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) name: String,
    pub(super) owner: Option<ApiOwner>,
    pub(super) description: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) homepage: Option<String>,
    pub(super) language: Option<String>,
    #[serde(default)]
    pub(super) stargazers_count: u64,
    #[serde(default)]
    pub(super) forks_count: u64,
    #[serde(default)]
    pub(super) watchers_count: u64,
    pub(super) created_at: Option<String>,
    pub(super) updated_at: Option<String>,
    #[serde(default)]
    pub(super) topics: Vec<String>,
    pub(super) visibility: Option<String>,
    pub(super) private: Option<bool>,
    pub(super) default_branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiOwner {
    pub(super) login: Option<String>,
    pub(super) avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiContentEntry {
    pub(super) name: String,
    pub(super) path: String,
    #[serde(rename = "type")]
    pub(super) kind: String,
    pub(super) download_url: Option<String>,
}

/// The contents endpoint returns an array for directories and an object for
/// a single file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum ApiContents {
    Directory(Vec<ApiContentEntry>),
    File(ApiContentEntry),
}

impl ApiRepository {
    /// Converts into domain metadata, filling the owner from the locator
    /// when the payload omits it.
    pub(super) fn into_metadata(self, fallback_owner: &str) -> RepositoryMetadata {
        let (owner, owner_avatar_url) = match self.owner {
            Some(ApiOwner { login, avatar_url }) => (
                login.unwrap_or_else(|| fallback_owner.to_owned()),
                avatar_url.filter(|url| !url.is_empty()),
            ),
            None => (fallback_owner.to_owned(), None),
        };

        RepositoryMetadata {
            owner,
            owner_avatar_url,
            name: self.name,
            description: self.description.filter(|text| !text.is_empty()),
            html_url: self.html_url,
            homepage_url: self.homepage.filter(|url| !url.is_empty()),
            primary_language: self.language,
            star_count: self.stargazers_count,
            fork_count: self.forks_count,
            watcher_count: self.watchers_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
            topics: self.topics,
            visibility: Visibility::resolve(self.visibility.as_deref(), self.private),
            default_branch: self
                .default_branch
                .filter(|branch| !branch.is_empty())
                .unwrap_or_else(|| DEFAULT_BRANCH.to_owned()),
        }
    }
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            owner: value
                .owner
                .and_then(|owner| owner.login)
                .unwrap_or_default(),
            name: value.name,
            description: value.description.filter(|text| !text.is_empty()),
            language: value.language,
            star_count: value.stargazers_count,
            default_branch: value
                .default_branch
                .filter(|branch| !branch.is_empty())
                .unwrap_or_else(|| DEFAULT_BRANCH.to_owned()),
            html_url: value.html_url,
            updated_at: value.updated_at,
            visibility: Visibility::resolve(value.visibility.as_deref(), value.private),
        }
    }
}

impl From<ApiContentEntry> for ContentEntry {
    fn from(value: ApiContentEntry) -> Self {
        let kind = match value.kind.as_str() {
            "file" => EntryKind::File,
            "dir" => EntryKind::Directory,
            _ => EntryKind::Other,
        };
        Self {
            name: value.name,
            path: value.path,
            kind,
            download_url: value.download_url,
        }
    }
}

impl From<ApiContents> for Vec<ContentEntry> {
    fn from(value: ApiContents) -> Self {
        match value {
            ApiContents::Directory(entries) => entries.into_iter().map(ContentEntry::from).collect(),
            ApiContents::File(entry) => vec![entry.into()],
        }
    }
}
