//! Commit processing pipeline.

use relnote_commit::CommitRecord;
use relnote_config::FilterConfig;
use tracing::info;

use crate::{ChangelogBundle, CommitLinks, build_bundle, filter_noise, pair_reverts};

/// Runs the noise filter, revert pairing and classification in order.
#[derive(Debug, Clone)]
pub struct Pipeline {
    noise: Vec<String>,
    links: CommitLinks,
}

/// Result of [`Pipeline::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    /// The classified changelog entries.
    pub bundle: ChangelogBundle,

    /// Revert targets that could not be paired with a commit.
    pub unmatched_reverts: Vec<String>,

    /// Number of commits dropped as noise.
    pub dropped_noise: usize,

    /// Number of commits dropped by revert pairing, reverts included.
    pub dropped_reverts: usize,
}

impl Pipeline {
    /// Creates a pipeline with the given noise denylist.
    #[must_use]
    pub fn new(noise: Vec<String>, links: CommitLinks) -> Self {
        Self { noise, links }
    }

    /// Creates a pipeline from the `[filter]` config section.
    ///
    /// Entries link to `repository_url` when one is known.
    #[must_use]
    pub fn from_config(filter: &FilterConfig, repository_url: Option<String>) -> Self {
        let links = repository_url.map_or_else(CommitLinks::unlinked, CommitLinks::new);
        Self::new(filter.noise.clone(), links)
    }

    /// Processes commits listed newest first.
    pub fn run(&self, commits: Vec<CommitRecord>) -> PipelineOutput {
        let total = commits.len();

        let filtered = filter_noise(commits, &self.noise);
        let dropped_noise = total - filtered.len();

        let outcome = pair_reverts(filtered);
        let dropped_reverts = outcome.reverts.len() + outcome.paired.len();

        let bundle = build_bundle(&outcome.kept, &self.links);

        info!(
            total,
            noise = dropped_noise,
            reverts = dropped_reverts,
            entries = bundle.len(),
            "processed commits"
        );

        PipelineOutput {
            bundle,
            unmatched_reverts: outcome.unmatched,
            dropped_noise,
            dropped_reverts,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default(), None)
    }
}
