//! Shared HTTP utilities for gateway implementations.

use http::header::{ACCEPT, HeaderMap, HeaderValue};

/// Media type that makes GitHub return file contents verbatim instead of a
/// base64 JSON envelope.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

pub(super) fn raw_content_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(RAW_MEDIA_TYPE));
    headers
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
