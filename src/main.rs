//! Repofolio CLI entrypoint for portfolio aggregation and repository listing.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use repofolio::{
    LanguageShare, OctocrabRepositoryGateway, OutputFormat, PortfolioError, ReadmeDraft,
    RepoAggregator, RepofolioConfig, RepositoryGateway, RepositoryLocator, RepositoryRecord,
    render_markdown,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Record as printed by the CLI, with derived language percentages.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioOutput<'record> {
    #[serde(flatten)]
    record: &'record RepositoryRecord,
    language_shares: Vec<LanguageShare>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to
/// warnings.
fn init_logging() -> Result<(), PortfolioError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| PortfolioError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}

async fn run() -> Result<(), PortfolioError> {
    init_logging()?;
    let config = load_config()?;

    if config.list {
        return list_repositories(&config).await;
    }

    let repo_url = config.require_repo_url()?;
    let locator = RepositoryLocator::parse(repo_url)?;

    if let Some(usage) = config.usage_profile() {
        let decision = config.quota().ensure(&usage)?;
        info!(?decision, "generation quota checked");
    }

    let token = config.resolve_token()?;
    let gateway = OctocrabRepositoryGateway::for_token(token.as_ref(), &config.api_base()?)?;
    let record = RepoAggregator::new(&gateway)
        .aggregate_locator(&locator)
        .await?;

    match config.output_format() {
        OutputFormat::Json => write_json(&PortfolioOutput {
            record: &record,
            language_shares: record.language_shares(),
        }),
        OutputFormat::Readme => write_readme(
            &ReadmeDraft::basic(&record, repo_url).with_features(&config.features),
        ),
        OutputFormat::EnhancedReadme => write_readme(
            &ReadmeDraft::enhanced(&record, repo_url).with_features(&config.features),
        ),
    }
}

/// Prints one page of the token owner's repositories as JSON.
async fn list_repositories(config: &RepofolioConfig) -> Result<(), PortfolioError> {
    let token = config.require_token()?;
    let gateway = OctocrabRepositoryGateway::for_token(Some(&token), &config.api_base()?)?;
    let listing = gateway
        .list_user_repositories(&config.listing_params())
        .await?;
    info!(
        page = listing.page,
        count = listing.repositories.len(),
        "repositories listed"
    );
    write_json(&listing)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PortfolioError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RepofolioConfig, PortfolioError> {
    RepofolioConfig::load().map_err(|error| PortfolioError::Configuration {
        message: error.to_string(),
    })
}

fn write_json<T: Serialize>(value: &T) -> Result<(), PortfolioError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(|error| PortfolioError::Io {
        message: error.to_string(),
    })?;
    writeln!(stdout).map_err(|error| PortfolioError::Io {
        message: error.to_string(),
    })
}

fn write_readme(draft: &ReadmeDraft) -> Result<(), PortfolioError> {
    let markdown = render_markdown(draft)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{markdown}").map_err(|error| PortfolioError::Io {
        message: error.to_string(),
    })
}
