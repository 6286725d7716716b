//! Classified changelog entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Changelog classification bucket.
///
/// Declaration order is the order sections appear in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New features.
    Added,
    /// Changes in existing functionality.
    Changed,
    /// Soon-to-be removed features.
    Deprecated,
    /// Removed features.
    Removed,
    /// Bug fixes.
    Fixed,
    /// Vulnerability fixes.
    Security,
}

impl Category {
    /// All categories, in render order.
    pub const ALL: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    /// Returns the section heading label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Platform an entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Applies to every platform.
    General,
    /// Android only.
    Android,
    /// iOS only.
    Ios,
}

impl Platform {
    /// All platforms, in render order.
    pub const ALL: [Self; 3] = [Self::General, Self::Android, Self::Ios];

    /// Returns the display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Android => "Android",
            Self::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rendered changelog line derived from one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// Human-readable description with its provenance suffix.
    pub text: String,

    /// The change category.
    pub category: Category,

    /// The platform bucket.
    pub platform: Platform,
}

impl ClassifiedEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category, platform: Platform) -> Self {
        Self {
            text: text.into(),
            category,
            platform,
        }
    }
}
