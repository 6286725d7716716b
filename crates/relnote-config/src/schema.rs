//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Substrings that mark a commit as infrastructure churn.
pub const DEFAULT_NOISE: [&str; 5] = [
    "travis",
    "circleci",
    "circle ci",
    "bump version numbers",
    "docker",
];

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Version configuration.
    #[serde(default)]
    pub version: VersionConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Commit filter configuration.
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Repository configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Path to the local checkout.
    #[serde(default = "default_repository_path")]
    pub path: String,

    /// Web URL used for commit links (e.g. `https://github.com/owner/repo`).
    ///
    /// Derived from [`RepositoryConfig::remote`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Remote the web URL is derived from.
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: default_repository_path(),
            url: None,
            remote: default_remote(),
        }
    }
}

fn default_repository_path() -> String {
    ".".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Version configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Tag prefix (e.g., "v").
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Suffix identifying release branches (e.g., "-stable").
    #[serde(default = "default_stable_suffix")]
    pub stable_suffix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            tag_prefix: default_tag_prefix(),
            stable_suffix: default_stable_suffix(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_stable_suffix() -> String {
    "-stable".to_string()
}

/// Changelog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Existing changelog the base version is read from.
    #[serde(default = "default_changelog_path")]
    pub path: String,

    /// Default output file. Standard output when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: default_changelog_path(),
            output: None,
        }
    }
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

/// Commit filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case-insensitive substrings that drop a commit.
    #[serde(default = "default_noise")]
    pub noise: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            noise: default_noise(),
        }
    }
}

fn default_noise() -> Vec<String> {
    DEFAULT_NOISE.iter().map(|s| (*s).to_string()).collect()
}
