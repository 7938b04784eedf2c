//! README drafts generated from an aggregated repository.
//!
//! A [`ReadmeDraft`] holds the sections of a README before rendering. Two
//! variants exist: [`ReadmeDraft::basic`] with plain generic sections and
//! [`ReadmeDraft::enhanced`] with technology badges, a quick start, and a
//! demo link. [`render_markdown`] turns either into Markdown.

mod template;

pub use template::render_markdown;

use serde::Serialize;
use url::Url;

use crate::portfolio::RepositoryRecord;

/// Description used by the basic variant when the repository has none.
pub const FALLBACK_DESCRIPTION: &str = "An awesome project built with modern technologies.";

/// Badge colour for technologies missing from the colour table.
pub const DEFAULT_BADGE_COLOR: &str = "555555";

const SHIELDS_BADGE_ROOT: &str = "https://img.shields.io/badge/";

const BADGE_COLORS: [(&str, &str); 21] = [
    ("TypeScript", "007ACC"),
    ("JavaScript", "F7DF1E"),
    ("Python", "3776AB"),
    ("React", "61DAFB"),
    ("Vue", "4FC08D"),
    ("Angular", "DD0031"),
    ("Node", "339933"),
    ("HTML", "E34F26"),
    ("CSS", "1572B6"),
    ("PHP", "777BB4"),
    ("Ruby", "CC342D"),
    ("Go", "00ADD8"),
    ("Rust", "000000"),
    ("Java", "007396"),
    ("Kotlin", "0095D5"),
    ("Swift", "FA7343"),
    ("C++", "00599C"),
    ("C#", "239120"),
    ("R", "276DC3"),
    ("Scala", "DC322F"),
    ("PLpgSQL", "336791"),
];

/// Sections of a README prior to rendering.
///
/// Prose sections (`installation`, `usage`, ...) are Markdown blocks that
/// carry their own heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadmeDraft {
    /// Top-level heading.
    pub title: String,
    /// Opening paragraph.
    pub description: String,
    /// Languages, largest first.
    pub technologies: Vec<String>,
    /// Feature bullet points, empty until the user adds some.
    pub features: Vec<String>,
    /// Image URLs shown under "Screenshots".
    pub screenshots: Vec<String>,
    /// Markdown image links to shields.io badges.
    pub badges: Vec<String>,
    /// Live deployment link.
    pub demo: Option<String>,
    /// Clone-and-run walkthrough.
    pub quick_start: Option<String>,
    /// Installation section.
    pub installation: String,
    /// Usage section.
    pub usage: String,
    /// Contributing section.
    pub contributing: String,
    /// License section.
    pub license: String,
}

impl ReadmeDraft {
    /// Plain README with generic sections.
    #[must_use]
    pub fn basic(record: &RepositoryRecord, repository_url: &str) -> Self {
        let name = &record.name;
        Self {
            title: name.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_owned()),
            technologies: technologies(record),
            features: Vec::new(),
            screenshots: screenshots(record),
            badges: Vec::new(),
            demo: None,
            quick_start: None,
            installation: format!(
                "## Installation\n\n\
                 1. Clone the repository:\n\
                 ```bash\ngit clone {repository_url}\ncd {name}\n```\n\n\
                 2. Install dependencies:\n\
                 ```bash\nnpm install\n# or\nyarn install\n```"
            ),
            usage: "## Usage\n\n```bash\nnpm start\n# or\nyarn start\n```".to_owned(),
            contributing: "## Contributing\n\n\
                           Contributions are welcome! Please feel free to submit a Pull Request."
                .to_owned(),
            license: "## License\n\n\
                      This project is licensed under the MIT License - see the \
                      [LICENSE](LICENSE) file for details."
                .to_owned(),
        }
    }

    /// README with badges, a quick start, and a synthesised description.
    #[must_use]
    pub fn enhanced(record: &RepositoryRecord, repository_url: &str) -> Self {
        let name = &record.name;
        let spoken_name = name.replace('-', " ");
        let technologies = technologies(record);

        let description = record.description.clone().unwrap_or_else(|| {
            format!(
                "A powerful {} project that {spoken_name}. \
                 Built with modern technologies and best practices.",
                technologies.join("/")
            )
        });

        let verb = if name.contains("generator") {
            "generates"
        } else {
            "provides"
        };
        let mut usage = format!("## 💡 Usage\n\nThis project {verb} {spoken_name}.");
        if let Some(homepage) = &record.homepage_url {
            usage.push_str(&format!("\n\n🔗 [Try it out here]({homepage})"));
        }

        let mut license = "## 📄 License\n\n\
                           This project is licensed under the MIT License - see the \
                           [LICENSE](LICENSE) file for details."
            .to_owned();
        if let Some(first) = technologies.first() {
            license.push_str(&format!(
                "\n\n<p align=\"center\">Made with ❤️ and {first}</p>"
            ));
        }

        Self {
            title: format!("{name} 🌟"),
            description,
            badges: technologies.iter().filter_map(|tech| badge(tech)).collect(),
            technologies,
            features: Vec::new(),
            screenshots: screenshots(record),
            demo: record.homepage_url.clone(),
            quick_start: Some(format!(
                "## 🚀 Quick Start\n\n\
                 ```bash\n\
                 # Clone the repository\ngit clone {repository_url}\n\n\
                 # Navigate to directory\ncd {name}\n\n\
                 # Install dependencies\nnpm install   # or yarn install\n\n\
                 # Start the project\nnpm start     # or yarn start\n\
                 ```"
            )),
            installation: "## 📦 Installation\n\n\
                           1. Ensure you have [Node.js](https://nodejs.org) installed\n\
                           2. Clone this repository\n\
                           3. Install dependencies:\n\
                           ```bash\nnpm install\n# or\nyarn install\n```"
                .to_owned(),
            usage,
            contributing: "## 👥 Contributing\n\n\
                           Contributions are welcome! Here's how you can help:\n\n\
                           1. Fork the repository\n\
                           2. Create your feature branch: `git checkout -b feature/amazing-feature`\n\
                           3. Commit your changes: `git commit -m 'Add amazing feature'`\n\
                           4. Push to the branch: `git push origin feature/amazing-feature`\n\
                           5. Open a Pull Request"
                .to_owned(),
            license,
        }
    }

    /// Replaces the feature bullet points, dropping blank entries.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.features = features
            .into_iter()
            .map(|feature| feature.as_ref().trim().to_owned())
            .filter(|feature| !feature.is_empty())
            .collect();
        self
    }
}

/// Hex colour for a technology badge.
#[must_use]
pub fn badge_color(technology: &str) -> &'static str {
    BADGE_COLORS
        .iter()
        .find(|(name, _)| *name == technology)
        .map_or(DEFAULT_BADGE_COLOR, |(_, color)| *color)
}

/// Markdown image link to a shields.io badge for `technology`.
///
/// Dashes and underscores in the label are doubled so shields.io keeps them
/// literal; the label and the logo name are then percent-encoded.
/// Returns `None` only if the badge URL cannot be built.
#[must_use]
pub fn badge(technology: &str) -> Option<String> {
    let label = technology.replace('-', "--").replace('_', "__");
    let mut url = Url::parse(SHIELDS_BADGE_ROOT).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(&format!("{label}-{}.svg", badge_color(technology)));
    url.query_pairs_mut()
        .append_pair("style", "for-the-badge")
        .append_pair("logo", &technology.to_lowercase())
        .append_pair("logoColor", "white");
    Some(format!("![{technology}]({url})"))
}

fn technologies(record: &RepositoryRecord) -> Vec<String> {
    record
        .language_shares()
        .into_iter()
        .map(|share| share.name)
        .collect()
}

fn screenshots(record: &RepositoryRecord) -> Vec<String> {
    record.images.iter().map(ToOwned::to_owned).collect()
}
