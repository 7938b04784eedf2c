//! Markdown rendering for README drafts using Jinja2-compatible templates.
//!
//! The template receives every [`ReadmeDraft`] field. List sections
//! (technologies, features, screenshots, badges) are omitted when empty.

use minijinja::{AutoEscape, Environment};

use crate::github::error::PortfolioError;

use super::ReadmeDraft;

const README_TEMPLATE: &str = r"# {{ title }}

{{ description }}

{% if demo %}
🔗 [Live demo]({{ demo }})

{% endif %}
{% if technologies %}
## Technologies

{% for tech in technologies %}
- {{ tech }}
{% endfor %}

{% endif %}
{% if features %}
## Features

{% for feature in features %}
- {{ feature }}
{% endfor %}

{% endif %}
{% if screenshots %}
## Screenshots

{% for screenshot in screenshots %}
![Screenshot]({{ screenshot }})
{% endfor %}

{% endif %}
{% if badges %}
## Badges

{% for badge in badges %}
{{ badge }}
{% endfor %}

{% endif %}
{% if quick_start %}
{{ quick_start }}

{% endif %}
{{ installation }}

{{ usage }}

{{ contributing }}

{{ license }}

---
<sub>Generated with repofolio</sub>
";

/// Renders `draft` as Markdown.
///
/// # Errors
///
/// Returns [`PortfolioError::Template`] if the template cannot be compiled
/// or rendered.
pub fn render_markdown(draft: &ReadmeDraft) -> Result<String, PortfolioError> {
    let mut env = Environment::new();

    // Markdown output; HTML escaping would mangle links and badges
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);

    env.add_template("readme", README_TEMPLATE)
        .map_err(|error| PortfolioError::Template {
            message: format!("invalid README template: {error}"),
        })?;

    let template = env
        .get_template("readme")
        .map_err(|error| PortfolioError::Template {
            message: format!("failed to retrieve README template: {error}"),
        })?;

    template
        .render(draft)
        .map_err(|error| PortfolioError::Template {
            message: format!("README rendering failed: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::render_markdown;
    use crate::github::models::RepositoryMetadata;
    use crate::portfolio::{ImageSet, RepositoryRecord};
    use crate::readme::ReadmeDraft;

    const URL: &str = "https://github.com/octocat/Hello-World";

    fn record(languages: &[(&str, u64)], images: &[&str]) -> RepositoryRecord {
        let metadata = RepositoryMetadata {
            owner: "octocat".to_owned(),
            name: "Hello-World".to_owned(),
            description: Some("My first repository on GitHub!".to_owned()),
            default_branch: "main".to_owned(),
            ..RepositoryMetadata::default()
        };
        let language_bytes: BTreeMap<String, u64> = languages
            .iter()
            .map(|(name, bytes)| ((*name).to_owned(), *bytes))
            .collect();
        let image_set: ImageSet = images.iter().copied().collect();
        RepositoryRecord::new(metadata, language_bytes, image_set)
    }

    #[rstest]
    fn renders_basic_sections_in_order() {
        let draft = ReadmeDraft::basic(
            &record(&[("Ruby", 1000)], &["https://example.com/a.png"]),
            URL,
        );
        let markdown = render_markdown(&draft).expect("README should render");

        assert!(markdown.starts_with("# Hello-World\n\nMy first repository on GitHub!\n"));
        assert!(markdown.contains("## Technologies\n\n- Ruby\n"));
        assert!(markdown.contains("## Screenshots\n\n![Screenshot](https://example.com/a.png)\n"));

        let technologies = markdown.find("## Technologies").unwrap_or(usize::MAX);
        let installation = markdown.find("## Installation").unwrap_or(usize::MAX);
        let license = markdown.find("## License").unwrap_or(usize::MAX);
        assert!(technologies < installation && installation < license);
    }

    #[rstest]
    fn empty_lists_omit_their_sections() {
        let draft = ReadmeDraft::basic(&record(&[], &[]), URL);
        let markdown = render_markdown(&draft).expect("README should render");

        assert!(!markdown.contains("## Technologies"));
        assert!(!markdown.contains("## Features"));
        assert!(!markdown.contains("## Screenshots"));
        assert!(!markdown.contains("## Badges"));
        assert!(!markdown.contains("Live demo"));
    }

    #[rstest]
    fn features_render_as_bullets() {
        let draft = ReadmeDraft::basic(&record(&[], &[]), URL)
            .with_features(["Live preview", "PDF export"]);
        let markdown = render_markdown(&draft).expect("README should render");

        assert!(markdown.contains("## Features\n\n- Live preview\n- PDF export\n"));
    }

    #[rstest]
    fn enhanced_output_keeps_links_unescaped() {
        let mut source = record(&[("C++", 10)], &[]);
        source.homepage_url = Some("https://example.com/?a=1&b=2".to_owned());
        let markdown =
            render_markdown(&ReadmeDraft::enhanced(&source, URL)).expect("README should render");

        assert!(markdown.contains("## Badges\n\n![C++](https://img.shields.io/badge/C++-00599C.svg"));
        assert!(markdown.contains("🔗 [Live demo](https://example.com/?a=1&b=2)"));
        assert!(markdown.contains("## 🚀 Quick Start"));
        assert!(!markdown.contains("&amp;"));
    }
}
