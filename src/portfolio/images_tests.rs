//! Unit tests for image discovery.

use rstest::{fixture, rstest};

use super::{ImageDiscovery, MAX_SEARCH_DEPTH, SearchMode, is_conventional_directory, is_image_file};
use crate::github::error::PortfolioError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::{ContentEntry, RepositoryMetadata};
use crate::portfolio::test_support::FakeRepositoryGateway;

const AVATAR: &str = "https://avatars.githubusercontent.com/u/583231?v=4";

#[fixture]
fn locator() -> RepositoryLocator {
    RepositoryLocator::from_owner_repo("octocat", "Hello-World").expect("locator should build")
}

#[fixture]
fn metadata() -> RepositoryMetadata {
    RepositoryMetadata {
        owner: "octocat".to_owned(),
        owner_avatar_url: Some(AVATAR.to_owned()),
        name: "Hello-World".to_owned(),
        default_branch: "main".to_owned(),
        ..RepositoryMetadata::default()
    }
}

fn download(path: &str) -> String {
    format!("https://raw.githubusercontent.com/octocat/Hello-World/main/{path}")
}

fn image(path: &str) -> ContentEntry {
    ContentEntry::file(path, Some(download(path).as_str()))
}

#[rstest]
#[case::png("logo.png", true)]
#[case::upper_case("SHOT.JPG", true)]
#[case::jpeg("photo.jpeg", true)]
#[case::webp("hero.webp", true)]
#[case::svg("icon.svg", true)]
#[case::gif("demo.gif", true)]
#[case::markdown("README.md", false)]
#[case::no_extension("png", false)]
#[case::hidden_extension_only(".png", false)]
#[case::bitmap("legacy.bmp", false)]
fn image_extension_allow_list(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_image_file(name), expected, "unexpected result for {name}");
}

#[rstest]
#[case::exact("screenshots", true)]
#[case::mixed_case("Assets", true)]
#[case::substring("project-images", true)]
#[case::dot_github(".github", true)]
#[case::source("src", false)]
#[case::tests("tests", false)]
fn conventional_directory_matching(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_conventional_directory(name), expected, "unexpected result for {name}");
}

#[rstest]
#[tokio::test]
async fn empty_repository_falls_back_to_avatar(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone());
    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec![AVATAR]);
}

#[rstest]
#[tokio::test]
async fn missing_avatar_uses_profile_picture_url(locator: RepositoryLocator) {
    let metadata = RepositoryMetadata {
        owner: "octocat".to_owned(),
        default_branch: "main".to_owned(),
        ..RepositoryMetadata::default()
    };
    let gateway = FakeRepositoryGateway::new(metadata.clone());
    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    assert!(images.contains("https://github.com/octocat.png"));
    assert_eq!(images.len(), 1);
}

#[rstest]
#[tokio::test]
async fn collects_root_and_conventional_folder_images(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory(
            "",
            vec![
                image("logo.png"),
                ContentEntry::file("README.md", Some(download("README.md").as_str())),
                ContentEntry::directory("src"),
                ContentEntry::directory("screenshots"),
            ],
        )
        .with_directory("screenshots", vec![image("screenshots/home.jpg")])
        .with_directory("src", vec![image("src/never.png")]);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    assert!(images.contains(&download("logo.png")));
    assert!(images.contains(&download("screenshots/home.jpg")));
    assert!(!images.contains(&download("src/never.png")), "src is not conventional");
    assert!(!images.contains(AVATAR), "avatar is only a fallback");
    assert!(
        !gateway.requested_paths().contains(&"src".to_owned()),
        "non-conventional folders should not be listed"
    );
}

#[rstest]
#[tokio::test]
async fn missing_download_url_uses_raw_content_url(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("", vec![ContentEntry::file("banner.svg", None)]);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    assert!(images.contains(&download("banner.svg")));
}

#[rstest]
#[tokio::test]
async fn raw_content_fallback_encodes_file_names(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("", vec![ContentEntry::file("home page #1.png", None)]);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec![download("home%20page%20%231.png").as_str()]);
}

#[rstest]
#[tokio::test]
async fn same_image_from_folder_and_readme_is_kept_once(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("", vec![ContentEntry::directory("screenshots")])
        .with_directory("screenshots", vec![image("screenshots/app.png")])
        .with_readme("# Demo\n![App](screenshots/app.png)\n<img src=\"./screenshots/app.png\">");

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec![download("screenshots/app.png").as_str()]);
}

#[rstest]
#[tokio::test]
async fn search_never_descends_past_depth_cap(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    // assets (1) / images (2) / screenshots (3) / media (4) / docs (5)
    let levels = [
        "assets",
        "assets/images",
        "assets/images/screenshots",
        "assets/images/screenshots/media",
        "assets/images/screenshots/media/docs",
    ];

    let mut gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("", vec![ContentEntry::directory("assets")]);
    for (index, level) in levels.iter().enumerate() {
        let mut entries = vec![image(&format!("{level}/level.png"))];
        if let Some(child) = levels.get(index + 1) {
            entries.push(ContentEntry::directory(child));
        }
        gateway = gateway.with_directory(level, entries);
    }

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    for (index, level) in levels.iter().enumerate() {
        let depth = index + 1;
        let url = download(&format!("{level}/level.png"));
        assert_eq!(
            images.contains(&url),
            depth <= MAX_SEARCH_DEPTH,
            "unexpected inclusion for depth {depth}"
        );
    }

    let requested = gateway.requested_paths();
    assert!(
        !requested.iter().any(|path| path.matches('/').count() >= MAX_SEARCH_DEPTH),
        "listed a directory below the depth cap: {requested:?}"
    );
}

#[rstest]
#[tokio::test]
async fn search_path_beyond_cap_returns_empty_without_requests(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("deep", vec![image("deep/x.png")]);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .search_path("deep", MAX_SEARCH_DEPTH + 1, SearchMode::Recursive)
        .await;

    assert!(images.is_empty());
    assert!(gateway.requested_paths().is_empty());
}

#[rstest]
#[tokio::test]
async fn shallow_search_ignores_subdirectories(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory(
            "docs",
            vec![image("docs/top.png"), ContentEntry::directory("docs/nested")],
        )
        .with_directory("docs/nested", vec![image("docs/nested/inner.png")]);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .search_path("docs", 1, SearchMode::Shallow)
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec![download("docs/top.png").as_str()]);
    assert_eq!(gateway.requested_paths(), vec!["docs".to_owned()]);
}

#[rstest]
#[tokio::test]
async fn enrichment_failures_are_absorbed(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let upstream = PortfolioError::Upstream {
        status: 500,
        message: "boom".to_owned(),
    };
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_directory("", vec![ContentEntry::directory("assets"), ContentEntry::directory("docs")])
        .with_failing_directory("assets", upstream.clone())
        .with_directory("docs", vec![image("docs/diagram.svg")])
        .with_readme_error(upstream);

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec![download("docs/diagram.svg").as_str()]);
}

#[rstest]
#[tokio::test]
async fn failing_root_listing_still_reads_readme(
    locator: RepositoryLocator,
    metadata: RepositoryMetadata,
) {
    let gateway = FakeRepositoryGateway::new(metadata.clone())
        .with_failing_directory(
            "",
            PortfolioError::Network {
                message: "connection reset".to_owned(),
            },
        )
        .with_readme("![hero](https://example.com/hero.png)");

    let images = ImageDiscovery::new(&gateway, &locator, &metadata)
        .find_images()
        .await;

    let urls: Vec<&str> = images.iter().collect();
    assert_eq!(urls, vec!["https://example.com/hero.png"]);
}
