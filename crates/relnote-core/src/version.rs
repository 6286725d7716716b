//! Revision range checks and version labels.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use tracing::debug;

use crate::{CoreError, CoreResult};

static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("invalid regex")
});

static RELEASE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##\s+\[?v?(\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?)\]?").expect("invalid regex")
});

/// Coerces a revision name into a version.
///
/// Accepts an optional `v` prefix and missing minor/patch parts, ignoring any
/// trailing text: `v0.71.3`, `0.72-stable` and `1` all coerce. Names that do
/// not start with a number (most branch names and hashes) do not.
pub fn coerce_version(revision: &str) -> Option<Version> {
    let captures = COERCE_RE.captures(revision.trim())?;
    let part = |index: usize| -> Option<u64> {
        captures
            .get(index)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// Checks that `base..compare` is a sensible range.
///
/// # Errors
///
/// Returns [`CoreError::SameVersions`] if both revisions are the same, and
/// [`CoreError::BaseNewer`] if both coerce to versions and base is the newer.
pub fn validate_range(base: &str, compare: &str) -> CoreResult<()> {
    if base == compare {
        return Err(CoreError::SameVersions(base.to_string()));
    }

    if let (Some(b), Some(c)) = (coerce_version(base), coerce_version(compare)) {
        if b > c {
            return Err(CoreError::BaseNewer {
                base: base.to_string(),
                compare: compare.to_string(),
            });
        }
    } else {
        debug!(%base, %compare, "revisions are not versions, skipping order check");
    }

    Ok(())
}

/// Returns the label used for the document heading.
pub fn version_label(compare: &str) -> String {
    coerce_version(compare).map_or_else(
        || compare.trim_start_matches('v').to_string(),
        |version| version.to_string(),
    )
}

/// Returns the version of the newest release listed in an existing changelog.
///
/// Headings such as `## [Unreleased]` are skipped.
pub fn latest_release_in_changelog(content: &str) -> Option<String> {
    RELEASE_HEADING_RE
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns the highest release branch, comparing coerced versions.
///
/// Only branches ending in `suffix` are considered. On a tie the later branch
/// wins.
pub fn highest_stable_branch<S: AsRef<str>>(branches: &[S], suffix: &str) -> Option<String> {
    branches
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.ends_with(suffix))
        .filter_map(|name| coerce_version(name).map(|v| (v, name)))
        .max_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, name)| name.to_string())
}
