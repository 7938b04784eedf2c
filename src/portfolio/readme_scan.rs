//! Image references scraped from README text.

use std::sync::LazyLock;

use regex::Regex;

use crate::github::locator::RepositoryLocator;

use super::record::ImageSet;

/// `![alt](url)` and `![alt](<url> "title")`.
static MARKDOWN_IMAGE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"!\[[^\]]*\]\(\s*<?([^\s)>]+)>?(?:\s+["'][^"']*["'])?\s*\)"#).ok()
});

/// `<img ... src="url" ...>` with either quote style.
static HTML_IMAGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?i)<img\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).ok());

/// Collects every image reference in `readme`, resolving relative paths
/// against the raw content of `branch`.
#[must_use]
pub fn scan_readme_images(readme: &str, locator: &RepositoryLocator, branch: &str) -> ImageSet {
    [&MARKDOWN_IMAGE, &HTML_IMAGE]
        .into_iter()
        .filter_map(|pattern| LazyLock::force(pattern).as_ref())
        .flat_map(|pattern| pattern.captures_iter(readme))
        .filter_map(|captures| captures.get(1))
        .filter_map(|reference| resolve_reference(reference.as_str(), locator, branch))
        .collect()
}

/// Turns a README reference into an absolute URL, or `None` for references
/// that never point at an image file (anchors, inline data).
fn resolve_reference(reference: &str, locator: &RepositoryLocator, branch: &str) -> Option<String> {
    let trimmed = reference.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("data:") {
        return None;
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        return Some(trimmed.to_owned());
    }
    if trimmed.starts_with("//") {
        return Some(format!("https:{trimmed}"));
    }

    locator.raw_content_url(branch, trimmed).ok()
}
