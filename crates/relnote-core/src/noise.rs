//! Noise filter.

use relnote_commit::CommitRecord;
use tracing::debug;

/// Drops commits whose message mentions any of the denylisted substrings.
///
/// Matching is case-insensitive against the full message. Order is preserved.
pub fn filter_noise<S: AsRef<str>>(
    commits: Vec<CommitRecord>,
    denylist: &[S],
) -> Vec<CommitRecord> {
    let denylist: Vec<String> = denylist
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    commits
        .into_iter()
        .filter(|commit| {
            let text = commit.message.to_lowercase();
            match denylist.iter().find(|needle| text.contains(needle.as_str())) {
                Some(needle) => {
                    debug!(id = %commit.short_id(), %needle, "dropping noise commit");
                    false
                }
                None => true,
            }
        })
        .collect()
}
