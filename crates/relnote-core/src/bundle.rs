//! Grouped changelog model.

use std::collections::BTreeMap;

use relnote_commit::{Category, ClassifiedEntry, CommitRecord, Platform};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::classify::{CommitLinks, classify};

/// Changelog entries grouped by category, then platform.
///
/// Every category holds every platform, even when empty, so renderers always
/// emit the full document skeleton. Deserialized bundles are merged into an
/// empty one, so buckets missing from the input are still present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangelogBundle {
    changes: BTreeMap<Category, BTreeMap<Platform, Vec<String>>>,
}

impl ChangelogBundle {
    /// Creates a bundle with every bucket present and empty.
    #[must_use]
    pub fn new() -> Self {
        let changes = Category::ALL
            .into_iter()
            .map(|category| {
                let platforms = Platform::ALL
                    .into_iter()
                    .map(|platform| (platform, Vec::new()))
                    .collect();
                (category, platforms)
            })
            .collect();
        Self { changes }
    }

    /// Appends an entry to its bucket.
    pub fn push(&mut self, entry: ClassifiedEntry) {
        self.changes
            .entry(entry.category)
            .or_default()
            .entry(entry.platform)
            .or_default()
            .push(entry.text);
    }

    /// Returns the entries of one bucket, in insertion order.
    #[must_use]
    pub fn entries(&self, category: Category, platform: Platform) -> &[String] {
        self.changes
            .get(&category)
            .and_then(|platforms| platforms.get(&platform))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the platform buckets of one category.
    #[must_use]
    pub fn platforms(&self, category: Category) -> Option<&BTreeMap<Platform, Vec<String>>> {
        self.changes.get(&category)
    }

    /// Returns the total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Returns true if no bucket holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChangelogBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for ChangelogBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed =
            BTreeMap::<Category, BTreeMap<Platform, Vec<String>>>::deserialize(deserializer)?;

        let mut bundle = Self::new();
        for (category, platforms) in parsed {
            let buckets = bundle.changes.entry(category).or_default();
            buckets.extend(platforms);
        }
        Ok(bundle)
    }
}

/// Classifies commits and collects the entries into a bundle.
///
/// Skipped commits contribute nothing; everything else lands in exactly one
/// bucket, in input order.
pub fn build_bundle(commits: &[CommitRecord], links: &CommitLinks) -> ChangelogBundle {
    let mut bundle = ChangelogBundle::new();

    for commit in commits {
        match classify(commit, links) {
            Some(entry) => bundle.push(entry),
            None => debug!(
                id = %commit.short_id(),
                subject = %commit.subject(),
                "skipping internal commit"
            ),
        }
    }

    bundle
}
