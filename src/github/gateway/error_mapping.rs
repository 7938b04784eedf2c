//! Error mapping helpers for the Octocrab gateway implementation.

use http::StatusCode;

use crate::github::error::PortfolioError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> PortfolioError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return PortfolioError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    PortfolioError::Configuration {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> PortfolioError {
    if status == StatusCode::NOT_FOUND {
        return PortfolioError::NotFound {
            resource: operation.to_owned(),
        };
    }

    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    let detail = if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        format!("{operation} failed: GitHub rejected the credentials: {message}")
    } else {
        format!("{operation} failed: {message}")
    };

    PortfolioError::Upstream {
        status: status.as_u16(),
        message: detail,
    }
}
