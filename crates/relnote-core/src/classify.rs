//! Commit classifier.
//!
//! Classification is keyword based. The subject decides whether a commit is
//! skipped; the full message decides platform and category.

use std::sync::LazyLock;

use regex::Regex;
use relnote_commit::{Category, ClassifiedEntry, CommitRecord, Platform};

/// Compiles a case-insensitive pattern with ASCII `\b` and `\w`.
///
/// Accented letters are not word characters, so `éfixed` still holds the
/// word `fixed`.
fn ci(pattern: &str) -> Regex {
    Regex::new(&format!("(?i-u){pattern}")).expect("invalid regex")
}

static FABRIC_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"\bfabric\b"));
static TURBO_MODULES_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"\btm\b"));
static INTERNAL_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"^\[internal\]"));

static PLATFORM_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| ci(r"\[ios\]|\[android\]|\[general\]"));
static LEADING_TAGS_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"^((\[\w*\] ?)+ - )"));
static PR_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u) \(#\d*\)$").expect("invalid regex"));

static NOT_ANDROID_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"\[ios\]|\[general\]"));
static ANDROID_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"\b(android|java)\b|android"));
static NOT_IOS_RE: LazyLock<Regex> = LazyLock::new(|| ci(r"\[android\]|\[general\]"));
static IOS_RE: LazyLock<Regex> =
    LazyLock::new(|| ci(r"\b(ios|xcode|swift|objective-c|iphone|ipad)\b|ios\b|\brct"));

/// Category keywords, in priority order. Changed is the fallback.
static CATEGORY_RULES: LazyLock<[(Category, Regex); 5]> = LazyLock::new(|| {
    [
        (Category::Added, ci(r"\badded\b")),
        (Category::Fixed, ci(r"\bfixed\b")),
        (Category::Removed, ci(r"\bremoved\b")),
        (Category::Deprecated, ci(r"\bdeprecated\b")),
        (Category::Security, ci(r"\bsecurity\b")),
    ]
});

/// Builds the provenance links appended to every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLinks {
    repository_url: Option<String>,
}

impl CommitLinks {
    /// Links commits to `<repository_url>/commit/<id>`.
    #[must_use]
    pub fn new(repository_url: impl Into<String>) -> Self {
        let url = repository_url.into();
        Self {
            repository_url: Some(url.trim_end_matches('/').to_string()),
        }
    }

    /// Renders commit ids without a link.
    #[must_use]
    pub fn unlinked() -> Self {
        Self::default()
    }

    /// Returns the provenance suffix for a commit, parentheses included.
    #[must_use]
    pub fn provenance(&self, commit: &CommitRecord) -> String {
        let short = commit.short_id();
        let id = match &self.repository_url {
            Some(url) => format!("[{short}]({url}/commit/{short})"),
            None => short.to_string(),
        };
        match &commit.author {
            Some(author) => format!("({id} by [{}](mailto:{}))", author.name, author.email),
            None => format!("({id})"),
        }
    }
}

/// Returns true if the subject marks a change that never reaches the changelog.
fn is_skipped(subject: &str) -> bool {
    FABRIC_RE.is_match(subject)
        || TURBO_MODULES_RE.is_match(subject)
        || INTERNAL_RE.is_match(subject)
}

/// Extracts the human-readable description from a message.
///
/// The last line carrying a platform tag wins; otherwise the subject is used.
fn display_text(message: &str) -> String {
    let line = message
        .lines()
        .rev()
        .find(|line| PLATFORM_TAG_RE.is_match(line))
        .or_else(|| message.lines().next())
        .unwrap_or("");

    let without_tags = LEADING_TAGS_RE.replace(line, "");
    let without_pr = PR_NUMBER_RE.replace(&without_tags, "");
    let line: &str = &without_pr;
    let line = line.strip_suffix('.').unwrap_or(line);
    let line = line.strip_prefix("- ").unwrap_or(line);
    line.to_string()
}

/// Determines the platform bucket from the full message.
///
/// An explicit tag for one platform (or `[General]`) suppresses keyword
/// matches for the other.
fn platform(message: &str) -> Platform {
    if !NOT_ANDROID_RE.is_match(message) && ANDROID_RE.is_match(message) {
        Platform::Android
    } else if !NOT_IOS_RE.is_match(message) && IOS_RE.is_match(message) {
        Platform::Ios
    } else {
        Platform::General
    }
}

/// Determines the category from the full message.
fn category(message: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(_, re)| re.is_match(message))
        .map_or(Category::Changed, |(category, _)| *category)
}

/// Classifies one commit.
///
/// Returns `None` for rendering-engine, cross-platform-module and internal
/// changes.
pub fn classify(commit: &CommitRecord, links: &CommitLinks) -> Option<ClassifiedEntry> {
    if is_skipped(commit.subject()) {
        return None;
    }

    let message = &commit.message;
    let text = format!("{} {}", display_text(message), links.provenance(commit));

    Some(ClassifiedEntry::new(text, category(message), platform(message)))
}
