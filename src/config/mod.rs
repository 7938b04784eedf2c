//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repofolio.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPOFOLIO_REPO_URL`, `REPOFOLIO_TOKEN`, or
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repo-url`/`-u`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! repo_url = "https://github.com/octocat/Hello-World"
//! token = "ghp_example"
//! api_url = "https://api.github.com"
//! enhanced_readme = true
//! features = ["Live preview", "PDF export"]
//! portfolios_generated = 1
//! free_generation_limit = 3
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::PortfolioError;
use crate::github::gateway::ListRepositoriesParams;
use crate::github::locator::PersonalAccessToken;
use crate::portfolio::quota::{DEFAULT_FREE_GENERATIONS, GenerationQuota, UsageProfile};

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// What the binary prints for an aggregated repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The repository record as JSON.
    Json,
    /// A basic README draft in Markdown.
    Readme,
    /// An enhanced README draft with badges and a quick start.
    EnhancedReadme,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use repofolio::RepofolioConfig;
///
/// let config = RepofolioConfig::load().expect("failed to load configuration");
/// let repo_url = config.require_repo_url().expect("repository URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPOFOLIO",
    discovery(
        dotfile_name = ".repofolio.toml",
        config_file_name = "repofolio.toml",
        app_name = "repofolio"
    )
)]
pub struct RepofolioConfig {
    /// GitHub repository URL to aggregate.
    ///
    /// Can be provided via:
    /// - CLI: `--repo-url <URL>` or `-u <URL>`
    /// - Environment: `REPOFOLIO_REPO_URL`
    /// - Config file: `repo_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub repo_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional; anonymous requests work for public repositories at a lower
    /// rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPOFOLIO_TOKEN` or `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Root of the GitHub REST API, overridable for GitHub Enterprise.
    #[ortho_config()]
    pub api_url: String,

    /// Prints a basic README draft instead of JSON.
    ///
    /// Can be provided via:
    /// - CLI: `--readme` / `-r`
    /// - Config file: `readme = true`
    #[ortho_config(cli_short = 'r')]
    pub readme: bool,

    /// Prints an enhanced README draft instead of JSON. Takes precedence
    /// over `readme`.
    ///
    /// Can be provided via:
    /// - CLI: `--enhanced-readme` / `-e`
    /// - Config file: `enhanced_readme = true`
    #[ortho_config(cli_short = 'e')]
    pub enhanced_readme: bool,

    /// Feature bullet points for README drafts.
    ///
    /// Can be provided via:
    /// - CLI: `--features <TEXT>`, repeatable
    /// - Config file: `features = ["...", "..."]`
    #[ortho_config()]
    pub features: Vec<String>,

    /// Lists the token owner's repositories instead of aggregating one.
    ///
    /// Requires a token. Can be provided via:
    /// - CLI: `--list` / `-l`
    /// - Config file: `list = true`
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Page of the repository listing to fetch, starting at 1.
    #[ortho_config(cli_short = 'g')]
    pub page: Option<u32>,

    /// Portfolios the requesting account has generated so far.
    ///
    /// When set (or when `premium` is set), the generation quota is enforced
    /// before any GitHub request.
    #[ortho_config(cli_short = 'P')]
    pub portfolios_generated: Option<u32>,

    /// Marks the requesting account as premium, lifting the quota.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `REPOFOLIO_PREMIUM` is ignored.
    #[ortho_config(cli_short = 'p')]
    pub premium: bool,

    /// Portfolios a free account may generate.
    #[ortho_config()]
    pub free_generation_limit: u32,
}

impl Default for RepofolioConfig {
    fn default() -> Self {
        Self {
            repo_url: None,
            token: None,
            api_url: DEFAULT_API_URL.to_owned(),
            readme: false,
            enhanced_readme: false,
            features: Vec::new(),
            list: false,
            page: None,
            portfolios_generated: None,
            premium: false,
            free_generation_limit: DEFAULT_FREE_GENERATIONS,
        }
    }
}

impl RepofolioConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Returns `Ok(None)` when neither source provides a value.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingToken`] when a token is configured
    /// but blank.
    pub fn resolve_token(&self) -> Result<Option<PersonalAccessToken>, PortfolioError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .map(PersonalAccessToken::new)
            .transpose()
    }

    /// Resolves the token like [`Self::resolve_token`] but requires one.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingToken`] when no token is configured
    /// or the configured token is blank.
    pub fn require_token(&self) -> Result<PersonalAccessToken, PortfolioError> {
        self.resolve_token()?.ok_or(PortfolioError::MissingToken)
    }

    /// Returns the repository URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingRepositoryUrl`] when no URL is
    /// configured.
    pub fn require_repo_url(&self) -> Result<&str, PortfolioError> {
        self.repo_url
            .as_deref()
            .ok_or(PortfolioError::MissingRepositoryUrl)
    }

    /// Parses `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Configuration`] when the value is not an
    /// absolute URL.
    pub fn api_base(&self) -> Result<Url, PortfolioError> {
        Url::parse(&self.api_url).map_err(|error| PortfolioError::Configuration {
            message: format!("invalid api_url {}: {error}", self.api_url),
        })
    }

    /// Usage counters to check against the quota, or `None` when the caller
    /// supplied no usage information.
    #[must_use]
    pub fn usage_profile(&self) -> Option<UsageProfile> {
        if self.portfolios_generated.is_none() && !self.premium {
            return None;
        }
        Some(UsageProfile {
            portfolios_generated: self.portfolios_generated.unwrap_or_default(),
            is_premium: self.premium,
        })
    }

    /// Quota built from `free_generation_limit`.
    #[must_use]
    pub const fn quota(&self) -> GenerationQuota {
        GenerationQuota::new(self.free_generation_limit)
    }

    /// Listing parameters for `--list`, using GitHub's maximum page size.
    #[must_use]
    pub const fn listing_params(&self) -> ListRepositoriesParams {
        ListRepositoriesParams {
            page: self.page,
            per_page: None,
        }
    }

    /// Determines the output format from the README flags.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.enhanced_readme {
            OutputFormat::EnhancedReadme
        } else if self.readme {
            OutputFormat::Readme
        } else {
            OutputFormat::Json
        }
    }
}

#[cfg(test)]
mod tests;
