//! Revert pairing filter.
//!
//! A revert cancels out the commit it undoes, so neither belongs in the
//! changelog. Reverts are recognised from their subject line, and the commit
//! they undo is located by fuzzy matching the remainder of that subject
//! against every other subject in the range.

use std::sync::LazyLock;

use regex::Regex;
use relnote_commit::CommitRecord;
use tracing::{debug, warn};

use crate::distance::levenshtein;

static REVERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?-u:\b)(revert d(?-u:\d){8}: |revert(?-u:\b)|back out ".*")"#)
        .expect("invalid regex")
});

/// Result of [`pair_reverts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevertOutcome {
    /// Commits that survived, in their original order.
    pub kept: Vec<CommitRecord>,

    /// Ids of the revert commits that were dropped.
    pub reverts: Vec<String>,

    /// Ids of the reverted commits that were located and dropped.
    pub paired: Vec<String>,

    /// Revert targets whose original commit could not be located.
    ///
    /// These have to be removed from the generated document by hand.
    pub unmatched: Vec<String>,
}

/// Returns true if the (lowercased) distance is close enough for `target`.
///
/// The tolerance is half the target length, strict.
fn is_close(subject: &str, target: &str) -> bool {
    let distance = levenshtein(subject, target);
    2 * distance < target.chars().count()
}

/// Drops revert commits and, where they can be found, the commits they revert.
///
/// Subjects are compared lowercased. Each surviving commit consumes at most one
/// pending target, the first close one in the order the reverts were seen.
pub fn pair_reverts(commits: Vec<CommitRecord>) -> RevertOutcome {
    let mut pending: Vec<String> = Vec::new();
    let mut outcome = RevertOutcome::default();
    let mut candidates = Vec::with_capacity(commits.len());

    for commit in commits {
        let subject = commit.subject().to_lowercase();
        if REVERT_RE.is_match(&subject) {
            warn!(id = %commit.short_id(), %subject, "removing revert commit");
            pending.push(REVERT_RE.replace(&subject, "").into_owned());
            outcome.reverts.push(commit.id);
        } else {
            candidates.push(commit);
        }
    }

    for commit in candidates {
        let subject = commit.subject().to_lowercase();
        match pending.iter().position(|target| is_close(&subject, target)) {
            Some(index) => {
                let target = pending.remove(index);
                debug!(id = %commit.short_id(), %target, "removing reverted commit");
                outcome.paired.push(commit.id);
            }
            None => outcome.kept.push(commit),
        }
    }

    if !pending.is_empty() {
        warn!(
            unmatched = %pending.join("\n"),
            "was unable to find the mate for {} revert commit(s); remove them from the changelog manually",
            pending.len()
        );
    }
    outcome.unmatched = pending;

    outcome
}
