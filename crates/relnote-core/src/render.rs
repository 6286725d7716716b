//! Document renderers.

use std::fmt::Write;

use relnote_commit::{Category, Platform};
use serde::Serialize;

use crate::{ChangelogBundle, CoreResult};

/// Turns a bundle into a changelog document.
pub trait ChangelogRenderer {
    /// Renders the changes of one version.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    fn render(&self, version: &str, bundle: &ChangelogBundle) -> CoreResult<String>;

    /// Returns the file extension for the output (e.g., "md").
    fn extension(&self) -> &'static str {
        "md"
    }
}

/// Markdown renderer in the Keep a Changelog layout.
///
/// Every category and platform heading is always emitted, so consecutive
/// releases share the same skeleton.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Returns the subsection heading for a platform-specific bucket.
    fn platform_heading(platform: Platform) -> String {
        format!("#### {platform} specific")
    }

    fn section(output: &mut String, heading: &str, entries: &[String]) {
        _ = writeln!(output, "{heading}\n");
        if entries.is_empty() {
            return;
        }
        for entry in entries {
            _ = writeln!(output, "- {entry}");
        }
        output.push('\n');
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    fn render(&self, version: &str, bundle: &ChangelogBundle) -> CoreResult<String> {
        let mut output = String::new();

        _ = writeln!(output, "# Changelog\n");
        _ = writeln!(output, "## [{version}] - Unreleased\n");

        for category in Category::ALL {
            Self::section(
                &mut output,
                &format!("### {category}"),
                bundle.entries(category, Platform::General),
            );
            for platform in [Platform::Android, Platform::Ios] {
                Self::section(
                    &mut output,
                    &Self::platform_heading(platform),
                    bundle.entries(category, platform),
                );
            }
        }

        output.truncate(output.trim_end().len());
        output.push('\n');
        Ok(output)
    }
}

/// JSON renderer for tooling that post-processes the changelog.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    version: &'a str,
    changes: &'a ChangelogBundle,
}

impl ChangelogRenderer for JsonRenderer {
    fn render(&self, version: &str, bundle: &ChangelogBundle) -> CoreResult<String> {
        let mut output = serde_json::to_string_pretty(&JsonDocument {
            version,
            changes: bundle,
        })?;
        output.push('\n');
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use relnote_commit::ClassifiedEntry;

    fn sample_bundle() -> ChangelogBundle {
        let mut bundle = ChangelogBundle::new();
        bundle.push(ClassifiedEntry::new(
            "Add Foo (abc1234)",
            Category::Added,
            Platform::General,
        ));
        bundle.push(ClassifiedEntry::new(
            "Fix Bar (def5678)",
            Category::Fixed,
            Platform::Ios,
        ));
        bundle.push(ClassifiedEntry::new(
            "Fix Baz (0123456)",
            Category::Fixed,
            Platform::Ios,
        ));
        bundle
    }

    #[test]
    fn test_empty_bundle_keeps_every_heading() {
        let output = MarkdownRenderer
            .render("0.72.0", &ChangelogBundle::new())
            .unwrap();

        assert_snapshot!(output, @r"
        # Changelog

        ## [0.72.0] - Unreleased

        ### Added

        #### Android specific

        #### iOS specific

        ### Changed

        #### Android specific

        #### iOS specific

        ### Deprecated

        #### Android specific

        #### iOS specific

        ### Removed

        #### Android specific

        #### iOS specific

        ### Fixed

        #### Android specific

        #### iOS specific

        ### Security

        #### Android specific

        #### iOS specific
        ");
    }

    #[test]
    fn test_heading_counts() {
        let output = MarkdownRenderer
            .render("0.72.0", &ChangelogBundle::new())
            .unwrap();

        assert_eq!(output.matches("\n### ").count(), 6);
        assert_eq!(output.matches("#### Android specific").count(), 6);
        assert_eq!(output.matches("#### iOS specific").count(), 6);
        assert!(!output.contains("\n- "));
    }

    #[test]
    fn test_entries_under_their_headings() {
        let output = MarkdownRenderer.render("1.0.0", &sample_bundle()).unwrap();

        assert!(output.contains("### Added\n\n- Add Foo (abc1234)\n\n#### Android specific"));
        assert!(output.contains(
            "### Fixed\n\n#### Android specific\n\n#### iOS specific\n\n- Fix Bar (def5678)\n- Fix Baz (0123456)\n\n### Security"
        ));
        assert!(output.ends_with("#### iOS specific\n"));
    }

    #[test]
    fn test_section_order() {
        let output = MarkdownRenderer.render("1.0.0", &sample_bundle()).unwrap();
        let positions: Vec<usize> = Category::ALL
            .iter()
            .map(|c| output.find(&format!("### {c}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_markdown_extension() {
        assert_eq!(MarkdownRenderer.extension(), "md");
    }

    #[test]
    fn test_json_document() {
        let output = JsonRenderer.render("1.0.0", &sample_bundle()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["changes"]["added"]["general"][0], "Add Foo (abc1234)");
        assert_eq!(value["changes"]["fixed"]["ios"].as_array().unwrap().len(), 2);
        assert_eq!(value["changes"]["deprecated"]["android"], serde_json::json!([]));
        assert_eq!(JsonRenderer.extension(), "json");
    }
}
