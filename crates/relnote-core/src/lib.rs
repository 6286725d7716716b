//! Core library for relnote.
//!
//! This crate turns an ordered list of commits into a changelog section.
//! Every stage is a plain function over owned data:
//!
//! 1. [`filter_noise`] drops infrastructure churn
//! 2. [`pair_reverts`] drops reverts together with the commits they undo
//! 3. [`build_bundle`] classifies what is left into a [`ChangelogBundle`]
//! 4. a [`ChangelogRenderer`] turns the bundle into text
//!
//! [`Pipeline`] chains the first three. No stage performs I/O.

mod bundle;
mod classify;
mod distance;
mod error;
mod noise;
mod pipeline;
mod render;
mod revert;
mod version;

pub use bundle::{ChangelogBundle, build_bundle};
pub use classify::{CommitLinks, classify};
pub use distance::levenshtein;
pub use error::{CoreError, CoreResult};
pub use noise::filter_noise;
pub use pipeline::{Pipeline, PipelineOutput};
pub use render::{ChangelogRenderer, JsonRenderer, MarkdownRenderer};
pub use revert::{RevertOutcome, pair_reverts};
pub use version::{
    coerce_version, highest_stable_branch, latest_release_in_changelog, validate_range,
    version_label,
};
