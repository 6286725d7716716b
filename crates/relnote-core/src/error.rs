//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Base and compare revisions are identical.
    #[error(
        "base and compare versions are both {0}; perhaps the latest version is already present in the changelog?"
    )]
    SameVersions(String),

    /// Base is a newer version than compare.
    #[error("base {base} is newer than compare {compare}; perhaps it has already been run?")]
    BaseNewer {
        /// The base revision.
        base: String,
        /// The compare revision.
        compare: String,
    },

    /// No release heading could be found in the existing changelog.
    #[error("no release heading found in the existing changelog")]
    NoBaseVersion,

    /// No release branch could be found to compare against.
    #[error("no local branch ending in {0:?} found")]
    NoStableBranch(String),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
