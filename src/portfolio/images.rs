//! Best-effort discovery of representative images for a repository.
//!
//! Discovery unions three strategies into one [`ImageSet`]:
//!
//! 1. image files at the repository root;
//! 2. image files under conventionally named folders (`screenshots`,
//!    `assets`, `docs`, ...), walked at most [`MAX_SEARCH_DEPTH`] levels deep;
//! 3. image references in the README.
//!
//! When all three come back empty the owner avatar is used so the page
//! always has something to show. Every failure here is logged and absorbed:
//! images are enrichment, never a reason to fail the portfolio.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::github::gateway::RepositoryGateway;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{ContentEntry, DirectoryProbe, EntryKind, RepositoryMetadata};

use super::readme_scan::scan_readme_images;
use super::record::ImageSet;

/// Deepest directory level searched. The root is level 0 and a conventional
/// folder at the root is level 1.
pub const MAX_SEARCH_DEPTH: usize = 3;

/// File extensions treated as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// Substrings that mark a root folder as a likely home for images.
pub const CONVENTIONAL_DIRECTORIES: [&str; 15] = [
    "screenshots",
    "screenshot",
    "images",
    "image",
    "img",
    "assets",
    "public",
    "docs",
    "doc",
    ".github",
    "static",
    "media",
    "resources",
    "demo",
    "preview",
];

/// Whether [`ImageDiscovery::search_path`] descends into subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Only the named directory.
    Shallow,
    /// The named directory and its subdirectories, up to the depth cap.
    Recursive,
}

/// Returns true when `name` ends in an allow-listed image extension.
#[must_use]
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, extension)| {
        !stem.is_empty()
            && IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| extension.eq_ignore_ascii_case(allowed))
    })
}

/// Returns true when a root folder name suggests it holds images.
#[must_use]
pub fn is_conventional_directory(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    CONVENTIONAL_DIRECTORIES
        .iter()
        .any(|candidate| lowered.contains(candidate))
}

/// Finds images for one repository through a gateway.
pub struct ImageDiscovery<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    client: &'client Gateway,
    locator: &'client RepositoryLocator,
    metadata: &'client RepositoryMetadata,
}

impl<'client, Gateway> ImageDiscovery<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Creates a discovery run for `locator`, using `metadata` for the
    /// default branch and the avatar fallback.
    #[must_use]
    pub const fn new(
        client: &'client Gateway,
        locator: &'client RepositoryLocator,
        metadata: &'client RepositoryMetadata,
    ) -> Self {
        Self {
            client,
            locator,
            metadata,
        }
    }

    /// Runs every strategy and returns the de-duplicated result.
    ///
    /// Never fails and never returns an empty set.
    pub async fn find_images(&self) -> ImageSet {
        let mut images = ImageSet::new();

        let root_entries = self.probe("").await;
        self.collect_images(&root_entries, &mut images);

        for entry in root_entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
            .filter(|entry| is_conventional_directory(&entry.name))
        {
            debug!(repository = %self.locator, path = %entry.path, "searching conventional folder");
            images.extend(self.search_path(&entry.path, 1, SearchMode::Recursive).await);
        }

        images.extend(self.readme_images().await);

        if images.is_empty() {
            debug!(repository = %self.locator, "no images found, using owner avatar");
            images.insert(self.avatar_url());
        }

        images
    }

    /// Collects images under `path`, which sits at `depth` below the root.
    ///
    /// Returns an empty set without any request once `depth` exceeds
    /// [`MAX_SEARCH_DEPTH`]. Subdirectories are visited breadth first and
    /// only in [`SearchMode::Recursive`].
    pub async fn search_path(&self, path: &str, depth: usize, mode: SearchMode) -> ImageSet {
        let mut images = ImageSet::new();
        let mut pending = VecDeque::from([(path.to_owned(), depth)]);

        while let Some((current, level)) = pending.pop_front() {
            if level > MAX_SEARCH_DEPTH {
                continue;
            }

            let entries = self.probe(&current).await;
            self.collect_images(&entries, &mut images);

            if mode == SearchMode::Recursive {
                pending.extend(
                    entries
                        .into_iter()
                        .filter(|entry| entry.kind == EntryKind::Directory)
                        .map(|entry| (entry.path, level + 1)),
                );
            }
        }

        images
    }

    /// Lists a directory, treating absence and failures alike as empty.
    async fn probe(&self, path: &str) -> Vec<ContentEntry> {
        match self.client.list_directory(self.locator, path).await {
            Ok(probe) => {
                if probe == DirectoryProbe::Absent {
                    debug!(repository = %self.locator, path, "directory absent");
                }
                probe.into_entries()
            }
            Err(error) => {
                warn!(repository = %self.locator, path, %error, "directory listing failed");
                Vec::new()
            }
        }
    }

    async fn readme_images(&self) -> ImageSet {
        match self.client.readme(self.locator).await {
            Ok(Some(text)) => {
                scan_readme_images(&text, self.locator, &self.metadata.default_branch)
            }
            Ok(None) => {
                debug!(repository = %self.locator, "repository has no README");
                ImageSet::new()
            }
            Err(error) => {
                warn!(repository = %self.locator, %error, "README lookup failed");
                ImageSet::new()
            }
        }
    }

    fn collect_images(&self, entries: &[ContentEntry], images: &mut ImageSet) {
        for entry in entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::File && is_image_file(&entry.name))
        {
            let url = entry.download_url.clone().or_else(|| {
                self.locator
                    .raw_content_url(&self.metadata.default_branch, &entry.path)
                    .ok()
            });
            if let Some(found) = url {
                images.insert(found);
            }
        }
    }

    fn avatar_url(&self) -> String {
        self.metadata
            .owner_avatar_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}.png", self.metadata.owner))
    }
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
