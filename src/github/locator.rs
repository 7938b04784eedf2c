//! URL parsing and identity wrappers for repository lookups.

use std::fmt;

use url::Url;

use super::error::PortfolioError;

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];
const RAW_CONTENT_ROOT: &str = "https://raw.githubusercontent.com/";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, PortfolioError> {
        if value.is_empty() {
            return Err(PortfolioError::InvalidUrl(
                "repository owner is missing".to_owned(),
            ));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, PortfolioError> {
        let trimmed = value.strip_suffix(".git").unwrap_or(value);
        if trimmed.is_empty() {
            return Err(PortfolioError::InvalidUrl(
                "repository name is missing".to_owned(),
            ));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, PortfolioError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PortfolioError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Parsed `github.com` repository URL.
///
/// # Example
///
/// ```
/// use repofolio::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("https://github.com/octocat/Hello-World.git")
///     .expect("should parse repository URL");
/// assert_eq!(locator.owner().as_str(), "octocat");
/// assert_eq!(locator.repository().as_str(), "Hello-World");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUrl` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, PortfolioError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// Parses a GitHub repository URL in the form
    /// `https://github.com/<owner>/<repo>[.git]`.
    ///
    /// A single trailing slash is tolerated; any further path segments are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUrl` when the input is not a URL, the
    /// host is not `github.com`, or the path is not exactly `/owner/repo`.
    pub fn parse(input: &str) -> Result<Self, PortfolioError> {
        let parsed = Url::parse(input.trim())
            .map_err(|error| PortfolioError::InvalidUrl(format!("{input}: {error}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PortfolioError::InvalidUrl(format!(
                "{input}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let host = parsed.host_str().unwrap_or_default();
        if !GITHUB_HOSTS
            .iter()
            .any(|candidate| host.eq_ignore_ascii_case(candidate))
        {
            return Err(PortfolioError::InvalidUrl(format!(
                "{input}: expected a github.com URL"
            )));
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|split| split.collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [owner, repo] | [owner, repo, ""] => Self::from_owner_repo(owner, repo),
            _ => Err(PortfolioError::InvalidUrl(format!(
                "{input}: path must be /<owner>/<repo>"
            ))),
        }
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn repository_path(&self) -> Result<String, PortfolioError> {
        self.api_path(&[])
    }

    pub(crate) fn languages_path(&self) -> Result<String, PortfolioError> {
        self.api_path(&["languages"])
    }

    pub(crate) fn readme_path(&self) -> Result<String, PortfolioError> {
        self.api_path(&["readme"])
    }

    /// API path for a directory listing. An empty `path` addresses the root.
    pub(crate) fn contents_path(&self, path: &str) -> Result<String, PortfolioError> {
        let mut segments = vec!["contents"];
        segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        self.api_path(&segments)
    }

    /// Raw file URL for `path` on `branch`, with each segment
    /// percent-encoded.
    ///
    /// `path` is taken relative to the repository root. `.` segments are
    /// dropped and `..` segments never climb above the root.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidUrl` when the URL cannot be built.
    pub(crate) fn raw_content_url(
        &self,
        branch: &str,
        path: &str,
    ) -> Result<String, PortfolioError> {
        let mut resolved: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }

        let mut url = Url::parse(RAW_CONTENT_ROOT)
            .map_err(|error| PortfolioError::InvalidUrl(error.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                PortfolioError::InvalidUrl("raw content root cannot be a base".to_owned())
            })?
            .clear()
            .push(self.owner.as_str())
            .push(self.repository.as_str())
            .extend(branch.split('/').filter(|segment| !segment.is_empty()))
            .extend(resolved);
        Ok(url.into())
    }

    /// Builds `/repos/<owner>/<repo>/<extra..>` with each segment
    /// percent-encoded.
    fn api_path(&self, extra: &[&str]) -> Result<String, PortfolioError> {
        let mut url = Url::parse("https://api.github.com/")
            .map_err(|error| PortfolioError::InvalidUrl(error.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| PortfolioError::InvalidUrl("API base cannot be a base".to_owned()))?
            .clear()
            .push("repos")
            .push(self.owner.as_str())
            .push(self.repository.as_str())
            .extend(extra);
        Ok(url.path().to_owned())
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
